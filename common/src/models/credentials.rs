use std::{fmt, path::Path};

use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct CredentialsFile {
    client_credentials: Option<ClientCredentialsSection>,
    service_principal_credentials: Option<ServicePrincipalSection>,
}

#[derive(Debug, Deserialize)]
struct ClientCredentialsSection {
    client_id: Option<String>,
    client_secret: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ServicePrincipalSection {
    organization_id: Option<String>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    organization_id: Option<String>,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>, organization_id: Option<String>) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        if client_id.trim().is_empty() {
            return Err(Error::Config("client_id must not be empty".to_string()));
        }
        if client_secret.trim().is_empty() {
            return Err(Error::Config("client_secret must not be empty".to_string()));
        }
        Ok(Credentials {
            client_id,
            client_secret,
            organization_id: organization_id.filter(|id| !id.trim().is_empty()),
        })
    }

    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|err| Error::Config(format!("could not read credentials file '{}': {}", path.display(), err)))?;
        let credentials = Self::from_json(&content).map_err(|err| match err {
            Error::Config(message) => Error::Config(format!("{} in '{}'", message, path.display())),
            other => other,
        })?;
        info!("Loaded credentials from {}", path.display());
        Ok(credentials)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let file: CredentialsFile = serde_json::from_str(json).map_err(|err| Error::Config(format!("malformed credentials: {}", err)))?;
        let client = file.client_credentials.ok_or_else(|| Error::Config("missing client_credentials".to_string()))?;
        let client_id = client.client_id.ok_or_else(|| Error::Config("missing client_credentials.client_id".to_string()))?;
        let client_secret = client.client_secret.ok_or_else(|| Error::Config("missing client_credentials.client_secret".to_string()))?;
        Self::new(client_id, client_secret, file.service_principal_credentials.and_then(|section| section.organization_id))
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn organization_id(&self) -> Option<&str> {
        self.organization_id.as_deref()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("organization_id", &self.organization_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const VALID: &str = r#"{
        "client_credentials": { "client_id": "id-123", "client_secret": "secret-456" },
        "service_principal_credentials": { "organization_id": "org@AdobeOrg" }
    }"#;

    #[test]
    fn parses_complete_file() {
        let credentials = Credentials::from_json(VALID).unwrap();
        assert_eq!(credentials.client_id(), "id-123");
        assert_eq!(credentials.client_secret(), "secret-456");
        assert_eq!(credentials.organization_id(), Some("org@AdobeOrg"));
    }

    #[test]
    fn organization_is_optional() {
        let credentials = Credentials::from_json(r#"{"client_credentials": {"client_id": "a", "client_secret": "b"}}"#).unwrap();
        assert_eq!(credentials.organization_id(), None);
    }

    #[test]
    fn rejects_missing_and_empty_fields() {
        let cases = [
            r#"{}"#,
            r#"{"client_credentials": {"client_secret": "b"}}"#,
            r#"{"client_credentials": {"client_id": "a"}}"#,
            r#"{"client_credentials": {"client_id": " ", "client_secret": "b"}}"#,
            r#"{"client_credentials": {"client_id": "a", "client_secret": ""}}"#,
            r#"not json"#,
        ];
        for case in cases {
            let err = Credentials::from_json(case).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Config, "{}", case);
        }
    }

    #[test]
    fn debug_hides_secret() {
        let credentials = Credentials::from_json(VALID).unwrap();
        let printed = format!("{:?}", credentials);
        assert!(printed.contains("id-123"));
        assert!(!printed.contains("secret-456"));
    }

    #[tokio::test]
    async fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Credentials::from_file(dir.path().join("pdfservices-api-credentials.json")).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().contains("pdfservices-api-credentials.json"));
    }

    #[tokio::test]
    async fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        std::fs::write(&path, VALID).unwrap();
        let credentials = Credentials::from_file(&path).await.unwrap();
        assert_eq!(credentials.client_id(), "id-123");
    }
}
