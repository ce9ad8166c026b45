use std::{sync::Arc, time::Duration};

use tracing::info;

use crate::{
    error::Result,
    models::{ClientConfig, Credentials, ProxyConfig},
    pdfservices::{
        assets::{AssetService, IAssetService},
        base::PdfServicesBase,
        jobs::{IJobService, JobService},
    },
    util::routes::DEFAULT_BASE_URI,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub base_uri: String,
    pub poll_interval: Duration,
}

impl Default for ServiceEndpoint {
    fn default() -> Self {
        ServiceEndpoint {
            base_uri: DEFAULT_BASE_URI.to_string(),
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// Session for remote operations. Every call made through it uses the
/// configured proxy and timeouts. Creating it performs no network I/O.
pub struct ExecutionContext {
    pub assets: Arc<dyn IAssetService>,
    pub jobs: Arc<dyn IJobService>,
    client_config: ClientConfig,
}

impl ExecutionContext {
    pub fn create(credentials: Credentials, client_config: ClientConfig) -> Result<Self> {
        Self::create_with_endpoint(credentials, client_config, &ServiceEndpoint::default())
    }

    pub fn create_with_endpoint(credentials: Credentials, client_config: ClientConfig, endpoint: &ServiceEndpoint) -> Result<Self> {
        let base = Arc::new(PdfServicesBase::build(credentials, &client_config, &endpoint.base_uri)?);
        info!(
            service = %endpoint.base_uri,
            proxy = client_config.proxy().map(ProxyConfig::uri).as_deref().unwrap_or("none"),
            "Created execution context"
        );
        Ok(ExecutionContext {
            assets: Arc::new(AssetService { base: base.clone() }),
            jobs: Arc::new(JobService {
                base,
                poll_interval: endpoint.poll_interval,
            }),
            client_config,
        })
    }

    pub fn from_services(client_config: ClientConfig, assets: Arc<dyn IAssetService>, jobs: Arc<dyn IJobService>) -> Self {
        ExecutionContext { assets, jobs, client_config }
    }

    pub fn client_config(&self) -> &ClientConfig {
        &self.client_config
    }
}
