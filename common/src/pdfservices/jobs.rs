use std::{sync::Arc, time::Duration};

use reqwest::header::LOCATION;
use tracing::{debug, info};

use super::base::{classify, read_json, PdfServicesBase};
use crate::{
    dtos::{AssetDto, JobStatus, JobStatusDto, OperationRequestDto},
    error::{Error, Result},
    util::routes::operation_route,
};

#[async_trait::async_trait]
pub trait IJobService: Send + Sync {
    /// Starts `operation` on an uploaded asset and returns the job status location.
    async fn submit(&self, operation: &str, asset_id: &str) -> Result<String>;
    /// Polls the job until it is done or failed.
    async fn wait_for_result(&self, location: &str) -> Result<AssetDto>;
}

pub struct JobService {
    pub base: Arc<PdfServicesBase>,
    pub poll_interval: Duration,
}

#[async_trait::async_trait]
impl IJobService for JobService {
    async fn submit(&self, operation: &str, asset_id: &str) -> Result<String> {
        let request = self.base.client.post(operation_route(&self.base.base_uri, operation)).json(&OperationRequestDto { asset_id });
        let request = self.base.authorized(request).await?;
        let response = self.base.send(request, "submit job").await?;
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|location| location.to_str().ok())
            .ok_or_else(|| Error::Transport {
                message: "Job was accepted without a location header".to_string(),
                source: None,
            })?;
        let location = self.base.resolve(location)?;
        info!("Submitted {} job, polling {}", operation, &location);
        Ok(location)
    }

    async fn wait_for_result(&self, location: &str) -> Result<AssetDto> {
        loop {
            let request = self.base.authorized(self.base.client.get(location)).await?;
            let response = self.base.send(request, "poll job status").await?;
            let job: JobStatusDto = read_json(response, "job status").await?;
            match job.status {
                JobStatus::InProgress => {
                    debug!("Job in progress, next poll in {:?}", self.poll_interval);
                    tokio::time::sleep(self.poll_interval).await;
                }
                JobStatus::Done => {
                    info!("Job finished");
                    return job.asset.ok_or_else(|| Error::Transport {
                        message: "Job finished without a result asset".to_string(),
                        source: None,
                    });
                }
                JobStatus::Failed => {
                    let error = job.error.unwrap_or_default();
                    let status = error.status.unwrap_or(500);
                    return Err(classify(status, error, "Job failed".to_string()));
                }
            }
        }
    }
}
