use std::{path::PathBuf, time::Duration};

use common::{
    models::{ClientConfig, ProxyConfig, ProxyScheme},
    state::ServiceEndpoint,
    Result,
};

pub const DEFAULT_CREDENTIALS_FILE: &str = "pdfservices-api-credentials.json";
pub const DEFAULT_INPUT_FILE: &str = "resources/createPDFInput.docx";
pub const DEFAULT_PROXY_PORT: u16 = 443;

#[derive(Debug, Clone)]
pub struct ProxySettings {
    pub host: String,
    pub scheme: ProxyScheme,
    pub port: Option<u16>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub credentials_file: PathBuf,
    pub input_file: PathBuf,
    pub input_media_type: Option<String>,
    pub output_root: PathBuf,
    pub service_uri: String,
    pub proxy: Option<ProxySettings>,
    pub connect_timeout_ms: u64,
    pub socket_timeout_ms: u64,
    pub poll_interval: Duration,
}

impl Settings {
    pub fn client_config(&self) -> Result<ClientConfig> {
        let proxy = match &self.proxy {
            Some(proxy) => Some(ProxyConfig::new(proxy.host.clone(), proxy.scheme, proxy.port)?),
            None => None,
        };
        ClientConfig::new(self.connect_timeout_ms, self.socket_timeout_ms, proxy)
    }

    pub fn endpoint(&self) -> ServiceEndpoint {
        ServiceEndpoint {
            base_uri: self.service_uri.clone(),
            poll_interval: self.poll_interval,
        }
    }
}

/// Unset or unparsable ports fall back to 443; an empty value selects the scheme's default port.
pub fn parse_proxy_port(value: Option<&str>) -> Option<u16> {
    match value.map(str::trim) {
        Some("") => None,
        Some(port) => Some(port.parse::<u16>().unwrap_or(DEFAULT_PROXY_PORT)),
        None => Some(DEFAULT_PROXY_PORT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_port_defaults() {
        assert_eq!(parse_proxy_port(None), Some(443));
        assert_eq!(parse_proxy_port(Some("8080")), Some(8080));
        assert_eq!(parse_proxy_port(Some("abc")), Some(443));
        assert_eq!(parse_proxy_port(Some("70000")), Some(443));
        assert_eq!(parse_proxy_port(Some("")), None);
    }

    #[test]
    fn proxy_without_port_uses_scheme_default() {
        let settings = Settings {
            credentials_file: PathBuf::from(DEFAULT_CREDENTIALS_FILE),
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            input_media_type: None,
            output_root: PathBuf::from("."),
            service_uri: "https://pdf-services.adobe.io".to_string(),
            proxy: Some(ProxySettings {
                host: "proxyhost".to_string(),
                scheme: ProxyScheme::Https,
                port: parse_proxy_port(Some("")),
            }),
            connect_timeout_ms: 10000,
            socket_timeout_ms: 40000,
            poll_interval: Duration::from_secs(1),
        };

        let config = settings.client_config().unwrap();

        assert_eq!(config.proxy().map(|proxy| proxy.port()), Some(443));
    }
}
