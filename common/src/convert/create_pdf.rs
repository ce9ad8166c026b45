use tracing::info;

use super::IOperation;
use crate::{
    error::{Error, Result},
    files::FileRef,
    state::ExecutionContext,
    util::mime::get_content_type,
};

pub const CREATE_PDF_OPERATION: &str = "createpdf";

/// Converts a supported office, text or image document into a PDF.
pub struct CreatePdfOperation {
    input: FileRef,
}

impl CreatePdfOperation {
    pub fn new(input: FileRef) -> Self {
        CreatePdfOperation { input }
    }

    pub fn input(&self) -> &FileRef {
        &self.input
    }
}

#[async_trait::async_trait]
impl IOperation for CreatePdfOperation {
    fn name(&self) -> &'static str {
        CREATE_PDF_OPERATION
    }

    #[tracing::instrument(skip_all, fields(operation = CREATE_PDF_OPERATION))]
    async fn execute(&self, context: &ExecutionContext) -> Result<FileRef> {
        let asset_id = match &self.input {
            FileRef::Local { path, media_type } => {
                let content = tokio::fs::read(path).await.map_err(|err| Error::local_io(path, err))?;
                info!("Uploading {} ({} KiB)", path.display(), content.len() / 1024);
                context.assets.upload_asset(media_type, content).await?
            }
            FileRef::Remote { asset_id, .. } => asset_id.clone(),
        };
        let location = context.jobs.submit(CREATE_PDF_OPERATION, &asset_id).await?;
        let asset = context.jobs.wait_for_result(&location).await?;
        let media_type = get_content_type(asset.metadata.as_ref().and_then(|metadata| metadata.media_type.as_deref()));
        Ok(FileRef::Remote {
            asset_id: asset.asset_id,
            download_uri: asset.download_uri,
            media_type,
        })
    }
}
