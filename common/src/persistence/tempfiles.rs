use std::{
    io,
    path::{Path, PathBuf},
};

use tokio::fs;
use tracing::warn;

use crate::{
    error::{Error, Result},
    util::random::generate_temp_suffix,
};

/// Sibling file that receives content before it is moved onto its destination,
/// so a failed write never leaves a partial file at the destination path.
#[derive(Debug)]
pub struct TempOutputFile {
    destination: PathBuf,
    temp_path: PathBuf,
}

impl TempOutputFile {
    pub async fn build(destination: &Path) -> Result<TempOutputFile> {
        let file_name = destination
            .file_name()
            .and_then(|file_name| file_name.to_str())
            .ok_or_else(|| Error::local_io(destination, io::Error::new(io::ErrorKind::InvalidInput, "destination has no file name")))?;
        let directory = destination.parent().unwrap_or_else(|| Path::new(""));
        if !directory.as_os_str().is_empty() {
            fs::create_dir_all(directory).await.map_err(|err| Error::local_io(directory, err))?;
        }
        let temp_path = directory.join(format!(".{}.{}.part", file_name, generate_temp_suffix()));
        Ok(TempOutputFile {
            destination: destination.to_path_buf(),
            temp_path,
        })
    }

    pub fn get_path(&self) -> &Path {
        &self.temp_path
    }

    /// Replaces any existing file at the destination.
    pub async fn persist(self) -> Result<PathBuf> {
        if let Err(err) = fs::rename(&self.temp_path, &self.destination).await {
            self.clean_up().await;
            return Err(Error::local_io(&self.destination, err));
        }
        Ok(self.destination)
    }

    pub async fn clean_up(&self) {
        match fs::remove_file(&self.temp_path).await {
            Err(err) if err.kind() != io::ErrorKind::NotFound => {
                warn!("Error occured, while deleting temp file {}: {}", self.temp_path.display(), err)
            }
            _ => {}
        }
    }
}
