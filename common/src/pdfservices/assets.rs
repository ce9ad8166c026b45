use std::{path::Path, sync::Arc};

use mime::Mime;
use reqwest::header::CONTENT_TYPE;
use tokio::io::AsyncWriteExt;
use tracing::info;

use super::base::{read_json, PdfServicesBase};
use crate::{
    dtos::{CreateAssetDto, UploadAssetDto},
    error::{Error, Result},
    util::routes::assets_route,
};

#[async_trait::async_trait]
pub trait IAssetService: Send + Sync {
    /// Registers a new asset and uploads its content, returning the asset id.
    async fn upload_asset(&self, media_type: &Mime, content: Vec<u8>) -> Result<String>;
    /// Streams a result asset into `destination`, returning the number of bytes written.
    async fn download_asset(&self, download_uri: &str, destination: &Path) -> Result<u64>;
}

pub struct AssetService {
    pub base: Arc<PdfServicesBase>,
}

#[async_trait::async_trait]
impl IAssetService for AssetService {
    #[tracing::instrument(skip(self, content))]
    async fn upload_asset(&self, media_type: &Mime, content: Vec<u8>) -> Result<String> {
        let request = self.base.client.post(assets_route(&self.base.base_uri)).json(&CreateAssetDto {
            media_type: media_type.essence_str(),
        });
        let request = self.base.authorized(request).await?;
        let response = self.base.send(request, "create asset").await?;
        let upload: UploadAssetDto = read_json(response, "asset upload location").await?;

        let request = self.base.client.put(&upload.upload_uri).header(CONTENT_TYPE, media_type.essence_str()).body(content);
        self.base.send(request, "upload asset").await?;
        info!("Uploaded asset {}", &upload.asset_id);
        Ok(upload.asset_id)
    }

    async fn download_asset(&self, download_uri: &str, destination: &Path) -> Result<u64> {
        let mut response = self.base.send(self.base.client.get(download_uri), "download asset").await?;
        let mut file = tokio::fs::File::create(destination).await.map_err(|err| Error::local_io(destination, err))?;
        let mut written = 0;
        while let Some(chunk) = response.chunk().await.map_err(|err| Error::transport("Could not read asset content", err))? {
            file.write_all(&chunk).await.map_err(|err| Error::local_io(destination, err))?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(|err| Error::local_io(destination, err))?;
        info!("Downloaded {} KiB", written / 1024);
        Ok(written)
    }
}
