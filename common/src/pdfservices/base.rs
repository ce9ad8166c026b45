use std::time::{Duration, Instant};

use reqwest::{Client, Proxy, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tokio::sync::Mutex;
use tracing::info;

use crate::{
    dtos::{ErrorBodyDto, ErrorDto, TokenDto, TokenRequestDto},
    error::{Error, Result},
    models::{ClientConfig, Credentials, ProxyConfig},
    util::routes::token_route,
};

const USER_AGENT: &str = concat!("createpdf/", env!("CARGO_PKG_VERSION"));
const TOKEN_EXPIRY_MARGIN: Duration = Duration::from_secs(60);
const USAGE_CODES: [&str; 3] = ["QUOTA_EXCEEDED", "INSUFFICIENT_QUOTA", "USAGE_LIMIT_EXCEEDED"];

struct AccessToken {
    value: String,
    expires_at: Instant,
}

/// Shared HTTP plumbing: proxied client, socket timeout and the cached access token.
pub struct PdfServicesBase {
    pub client: Client,
    pub base_uri: String,
    pub socket_timeout: Duration,
    credentials: Credentials,
    token: Mutex<Option<AccessToken>>,
}

impl PdfServicesBase {
    pub fn build(credentials: Credentials, client_config: &ClientConfig, base_uri: &str) -> Result<Self> {
        Url::parse(base_uri).map_err(|err| Error::Session(format!("invalid service uri '{}': {}", base_uri, err)))?;
        let builder = Client::builder().connect_timeout(client_config.connect_timeout()).user_agent(USER_AGENT);
        let builder = match client_config.proxy() {
            Some(proxy) => builder.proxy(build_proxy(proxy)?),
            None => builder.no_proxy(),
        };
        let client = builder.build().map_err(|err| Error::Session(format!("could not build http client: {}", err)))?;
        Ok(PdfServicesBase {
            client,
            base_uri: base_uri.to_string(),
            socket_timeout: client_config.socket_timeout(),
            credentials,
            token: Mutex::new(None),
        })
    }

    pub async fn access_token(&self) -> Result<String> {
        let mut token = self.token.lock().await;
        if let Some(cached) = token.as_ref() {
            if cached.expires_at > Instant::now() + TOKEN_EXPIRY_MARGIN {
                return Ok(cached.value.clone());
            }
        }
        let request = self.client.post(token_route(&self.base_uri)).form(&TokenRequestDto {
            client_id: self.credentials.client_id(),
            client_secret: self.credentials.client_secret(),
        });
        let response = self.send(request, "request access token").await?;
        let dto: TokenDto = read_json(response, "access token").await?;
        info!("Obtained access token valid for {} seconds", dto.expires_in);
        let expires_at = Instant::now().checked_add(Duration::from_secs(dto.expires_in)).ok_or_else(|| Error::Transport {
            message: format!("Access token lifetime of {} seconds is out of range", dto.expires_in),
            source: None,
        })?;
        let value = dto.access_token.clone();
        *token = Some(AccessToken { value: dto.access_token, expires_at });
        Ok(value)
    }

    pub async fn authorized(&self, request: RequestBuilder) -> Result<RequestBuilder> {
        let token = self.access_token().await?;
        Ok(request.header("x-api-key", self.credentials.client_id()).bearer_auth(token))
    }

    /// Applies the socket timeout and turns unsuccessful statuses into errors.
    pub async fn send(&self, request: RequestBuilder, action: &str) -> Result<Response> {
        let response = request
            .timeout(self.socket_timeout)
            .send()
            .await
            .map_err(|err| Error::transport(format!("Could not {}", action), err))?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(classify_response_error(status.as_u16(), &body, action))
    }

    pub fn resolve(&self, location: &str) -> Result<String> {
        let base = Url::parse(&self.base_uri).map_err(|err| Error::Session(format!("invalid service uri '{}': {}", self.base_uri, err)))?;
        let resolved = base.join(location).map_err(|err| Error::Transport {
            message: format!("Invalid job location '{}': {}", location, err),
            source: None,
        })?;
        Ok(resolved.to_string())
    }
}

fn build_proxy(proxy: &ProxyConfig) -> Result<Proxy> {
    let uri = proxy.uri();
    let url = Url::parse(&uri).map_err(|err| Error::Session(format!("invalid proxy '{}': {}", uri, err)))?;
    let host = proxy.host().to_ascii_lowercase();
    if url.host_str() != Some(host.as_str()) || url.port_or_known_default() != Some(proxy.port()) {
        return Err(Error::Session(format!("proxy host '{}' does not form a valid proxy address", proxy.host())));
    }
    Proxy::all(url).map_err(|err| Error::Session(format!("invalid proxy '{}': {}", uri, err)))
}

pub async fn read_json<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    response.json::<T>().await.map_err(|err| Error::transport(format!("Could not read {}", what), err))
}

pub fn classify_response_error(status: u16, body: &str, action: &str) -> Error {
    let error = serde_json::from_str::<ErrorBodyDto>(body).map(ErrorBodyDto::into_error).unwrap_or_default();
    let fallback = match body.trim() {
        "" => format!("Could not {}", action),
        text => text.to_string(),
    };
    classify(status, error, fallback)
}

pub fn classify(status: u16, error: ErrorDto, fallback: String) -> Error {
    let message = error.message.unwrap_or(fallback);
    let usage = status == 429 || error.code.as_deref().map_or(false, |code| USAGE_CODES.contains(&code));
    if usage {
        Error::Usage { status, code: error.code, message }
    } else {
        Error::Service { status, code: error.code, message }
    }
}
