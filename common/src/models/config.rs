use std::{fmt, str::FromStr, time::Duration};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyScheme {
    Http,
    Https,
}

impl ProxyScheme {
    pub fn default_port(&self) -> u16 {
        match self {
            ProxyScheme::Http => 80,
            ProxyScheme::Https => 443,
        }
    }
}

impl fmt::Display for ProxyScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyScheme::Http => f.write_str("http"),
            ProxyScheme::Https => f.write_str("https"),
        }
    }
}

impl FromStr for ProxyScheme {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(ProxyScheme::Http),
            "https" => Ok(ProxyScheme::Https),
            other => Err(Error::Config(format!("unknown proxy scheme '{}'", other))),
        }
    }
}

/// Proxy server every request of an execution context is routed through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    host: String,
    scheme: ProxyScheme,
    port: u16,
}

impl ProxyConfig {
    /// Without a port the scheme's default port is used.
    pub fn new(host: impl Into<String>, scheme: ProxyScheme, port: Option<u16>) -> Result<Self> {
        let host = host.into();
        if host.trim().is_empty() {
            return Err(Error::Config("proxy host must not be empty".to_string()));
        }
        let port = port.unwrap_or_else(|| scheme.default_port());
        if port == 0 {
            return Err(Error::Config("proxy port must be greater than 0".to_string()));
        }
        Ok(ProxyConfig { host, scheme, port })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn scheme(&self) -> ProxyScheme {
        self.scheme
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn uri(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    connect_timeout_ms: u64,
    socket_timeout_ms: u64,
    proxy: Option<ProxyConfig>,
}

impl ClientConfig {
    pub fn new(connect_timeout_ms: u64, socket_timeout_ms: u64, proxy: Option<ProxyConfig>) -> Result<Self> {
        if connect_timeout_ms == 0 {
            return Err(Error::Config("connect timeout must be greater than 0".to_string()));
        }
        if socket_timeout_ms == 0 {
            return Err(Error::Config("socket timeout must be greater than 0".to_string()));
        }
        Ok(ClientConfig {
            connect_timeout_ms,
            socket_timeout_ms,
            proxy,
        })
    }

    pub fn connect_timeout_ms(&self) -> u64 {
        self.connect_timeout_ms
    }

    pub fn socket_timeout_ms(&self) -> u64 {
        self.socket_timeout_ms
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn socket_timeout(&self) -> Duration {
        Duration::from_millis(self.socket_timeout_ms)
    }

    pub fn proxy(&self) -> Option<&ProxyConfig> {
        self.proxy.as_ref()
    }
}
