use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetDto<'a> {
    pub media_type: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadAssetDto {
    pub upload_uri: String,
    #[serde(rename = "assetID")]
    pub asset_id: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AssetDto {
    #[serde(rename = "assetID")]
    pub asset_id: String,
    pub download_uri: String,
    pub metadata: Option<AssetMetadataDto>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetMetadataDto {
    #[serde(rename = "type")]
    pub media_type: Option<String>,
    pub size: Option<u64>,
}
