use std::{
    io,
    path::Path,
    sync::{Arc, Mutex},
    time::Duration,
};

use chrono::{NaiveDate, NaiveDateTime};
use common::models::ProxyScheme;
use createpdf::state::{ProxySettings, Settings};

pub const CREDENTIALS: &str = r#"{
    "client_credentials": { "client_id": "client-id", "client_secret": "client-secret" },
    "service_principal_credentials": { "organization_id": "org@AdobeOrg" }
}"#;

/// Collects the JSON log lines written by a scoped subscriber.
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogCapture {
    pub fn subscriber(&self) -> impl tracing::Subscriber + Send + Sync + 'static {
        let writer = self.clone();
        tracing_subscriber::fmt().json().with_writer(move || writer.clone()).finish()
    }

    pub fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock().unwrap()).lines().map(str::to_string).collect()
    }

    pub fn error_count(&self) -> usize {
        self.lines().iter().filter(|line| line.contains(r#""level":"ERROR""#)).count()
    }
}

pub fn fixed_clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(14, 7, 9).unwrap()
}

/// Settings rooted in `dir` with a direct connection to `service_uri`.
pub fn settings(dir: &Path, service_uri: &str) -> Settings {
    Settings {
        credentials_file: dir.join("pdfservices-api-credentials.json"),
        input_file: dir.join("createPDFInput.docx"),
        input_media_type: None,
        output_root: dir.to_path_buf(),
        service_uri: service_uri.to_string(),
        proxy: None,
        connect_timeout_ms: 2000,
        socket_timeout_ms: 5000,
        poll_interval: Duration::from_millis(10),
    }
}

/// Routes every request through an HTTP proxy at `host:port`.
pub fn proxied(mut settings: Settings, host: &str, port: u16) -> Settings {
    settings.proxy = Some(ProxySettings {
        host: host.to_string(),
        scheme: ProxyScheme::Http,
        port: Some(port),
    });
    settings
}

pub fn write_inputs(dir: &Path, input: &[u8]) {
    std::fs::write(dir.join("pdfservices-api-credentials.json"), CREDENTIALS).unwrap();
    std::fs::write(dir.join("createPDFInput.docx"), input).unwrap();
}
