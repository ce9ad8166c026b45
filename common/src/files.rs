use std::path::{Path, PathBuf};

use mime::Mime;
use tracing::info;

use crate::{
    error::{Error, Result},
    persistence::tempfiles::TempOutputFile,
    state::ExecutionContext,
    util::mime::get_media_type,
};

/// Reference to file content, either on the local disk or held by the service.
#[derive(Debug, Clone, PartialEq)]
pub enum FileRef {
    Local { path: PathBuf, media_type: Mime },
    Remote { asset_id: String, download_uri: String, media_type: Mime },
}

impl FileRef {
    /// The media type is derived from the extension; unsupported formats are rejected.
    pub fn create_from_local_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let media_type = get_media_type(&path).ok_or_else(|| Error::Config(format!("unsupported input format '{}'", path.display())))?;
        Ok(FileRef::Local { path, media_type })
    }

    pub fn create_from_local_file_with_media_type(path: impl Into<PathBuf>, media_type: &str) -> Result<Self> {
        let media_type = media_type.parse::<Mime>().map_err(|err| Error::Config(format!("invalid media type '{}': {}", media_type, err)))?;
        Ok(FileRef::Local { path: path.into(), media_type })
    }

    pub fn media_type(&self) -> &Mime {
        match self {
            FileRef::Local { media_type, .. } => media_type,
            FileRef::Remote { media_type, .. } => media_type,
        }
    }

    /// Writes the content to `destination`, creating parent directories and
    /// replacing an existing file. The destination only appears once the
    /// content is complete.
    pub async fn save_as(&self, context: &ExecutionContext, destination: impl AsRef<Path>) -> Result<PathBuf> {
        let destination = destination.as_ref();
        let temp = TempOutputFile::build(destination).await?;
        let written = match self {
            FileRef::Local { path, .. } => tokio::fs::copy(path, temp.get_path()).await.map_err(|err| Error::local_io(path, err)),
            FileRef::Remote { download_uri, .. } => context.assets.download_asset(download_uri, temp.get_path()).await,
        };
        if let Err(err) = written {
            temp.clean_up().await;
            return Err(err);
        }
        let saved = temp.persist().await?;
        info!("Saved result to {}", saved.display());
        Ok(saved)
    }
}
