use serde::{Deserialize, Serialize};

use super::{AssetDto, ErrorDto};

#[derive(Debug, Serialize)]
pub struct OperationRequestDto<'a> {
    #[serde(rename = "assetID")]
    pub asset_id: &'a str,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub enum JobStatus {
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
    #[serde(rename = "failed")]
    Failed,
}

#[derive(Debug, Deserialize)]
pub struct JobStatusDto {
    pub status: JobStatus,
    pub asset: Option<AssetDto>,
    pub error: Option<ErrorDto>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_done_status() {
        let dto: JobStatusDto = serde_json::from_str(
            r#"{"status":"done","asset":{"metadata":{"type":"application/pdf","size":1024},"downloadUri":"https://dl/result","assetID":"urn:aaid:1"}}"#,
        )
        .unwrap();
        assert_eq!(dto.status, JobStatus::Done);
        let asset = dto.asset.unwrap();
        assert_eq!(asset.asset_id, "urn:aaid:1");
        assert_eq!(asset.download_uri, "https://dl/result");
        assert_eq!(asset.metadata.unwrap().media_type.as_deref(), Some("application/pdf"));
    }

    #[test]
    fn reads_failed_status() {
        let dto: JobStatusDto = serde_json::from_str(r#"{"status":"failed","error":{"code":"BAD_PDF","message":"corrupt","status":400}}"#).unwrap();
        assert_eq!(dto.status, JobStatus::Failed);
        assert_eq!(dto.error.unwrap().code.as_deref(), Some("BAD_PDF"));
    }

    #[test]
    fn serializes_asset_reference() {
        let body = serde_json::to_string(&OperationRequestDto { asset_id: "urn:aaid:2" }).unwrap();
        assert_eq!(body, r#"{"assetID":"urn:aaid:2"}"#);
    }
}
