use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use common::{
    convert::{CreatePdfOperation, IOperation},
    files::FileRef,
    models::Credentials,
    state::ExecutionContext,
    util::output::create_output_file_path_at,
    Result,
};
use tracing::{error, info};

use crate::state::Settings;

/// Loads credentials, builds the proxied context, converts the input file and
/// saves the result under the output root. `clock` is read once the remote
/// job has finished and names the output file.
pub async fn run<C>(settings: &Settings, clock: C) -> Result<PathBuf>
where
    C: FnOnce() -> NaiveDateTime,
{
    let credentials = Credentials::from_file(&settings.credentials_file).await?;
    if let Some(organization) = credentials.organization_id() {
        info!(organization, "Loaded credentials");
    }
    let client_config = settings.client_config()?;
    let context = ExecutionContext::create_with_endpoint(credentials, client_config, &settings.endpoint())?;

    let source = match &settings.input_media_type {
        Some(media_type) => FileRef::create_from_local_file_with_media_type(&settings.input_file, media_type)?,
        None => FileRef::create_from_local_file(&settings.input_file)?,
    };
    let operation = CreatePdfOperation::new(source);
    info!("Executing {} for {}", operation.name(), settings.input_file.display());
    let result = operation.execute(&context).await?;

    let output_file_path = settings.output_root.join(create_output_file_path_at(clock()));
    result.save_as(&context, &output_file_path).await
}

pub async fn run_now(settings: &Settings) -> Result<PathBuf> {
    run(settings, || Local::now().naive_local()).await
}

/// Single failure boundary: logs the outcome once and returns the process exit code.
pub fn report(result: &Result<PathBuf>) -> u8 {
    match result {
        Ok(path) => {
            info!(output = %path.display(), "Operation finished");
            0
        }
        Err(err) => {
            error!(kind = ?err.kind(), details = ?err, "Exception encountered while executing operation: {}", err);
            err.exit_code()
        }
    }
}
