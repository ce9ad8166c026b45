use std::{env, path::PathBuf, process::ExitCode, time::Duration};

use common::models::ProxyScheme;
use createpdf::{
    state::{parse_proxy_port, ProxySettings, Settings, DEFAULT_CREDENTIALS_FILE, DEFAULT_INPUT_FILE},
    workflow,
};

#[tokio::main]
async fn main() -> ExitCode {
    let subscriber = tracing_subscriber::fmt().json().finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Could not init tracing.");
    }

    let settings = Settings {
        credentials_file: get_credentials_file(),
        input_file: get_input_file(),
        input_media_type: env::var("INPUT_MEDIA_TYPE").ok().filter(|media_type| !media_type.is_empty()),
        output_root: get_output_root(),
        service_uri: get_service_uri(),
        proxy: get_proxy(),
        connect_timeout_ms: get_millis("CONNECT_TIMEOUT_MS", 10000),
        socket_timeout_ms: get_millis("SOCKET_TIMEOUT_MS", 40000),
        poll_interval: Duration::from_millis(get_millis("POLL_INTERVAL_MS", 1000)),
    };

    let result = workflow::run_now(&settings).await;
    ExitCode::from(workflow::report(&result))
}

fn get_credentials_file() -> PathBuf {
    PathBuf::from(env::var("PDF_SERVICES_CREDENTIALS").unwrap_or_else(|_| DEFAULT_CREDENTIALS_FILE.to_string()))
}

fn get_input_file() -> PathBuf {
    PathBuf::from(env::var("INPUT_FILE").unwrap_or_else(|_| DEFAULT_INPUT_FILE.to_string()))
}

fn get_output_root() -> PathBuf {
    PathBuf::from(env::var("OUTPUT_ROOT").unwrap_or_else(|_| ".".to_string()))
}

fn get_service_uri() -> String {
    env::var("PDF_SERVICES_URI").unwrap_or_else(|_| common::util::routes::DEFAULT_BASE_URI.to_string())
}

// PROXY_HOST=NONE connects directly, an empty PROXY_PORT uses the scheme's default port.
fn get_proxy() -> Option<ProxySettings> {
    let host = env::var("PROXY_HOST").unwrap_or_else(|_| "PROXY_HOSTNAME".to_string());
    if host == "NONE" {
        return None;
    }
    let scheme = env::var("PROXY_SCHEME").ok().and_then(|scheme| scheme.parse::<ProxyScheme>().ok()).unwrap_or(ProxyScheme::Http);
    let port = parse_proxy_port(env::var("PROXY_PORT").ok().as_deref());
    Some(ProxySettings { host, scheme, port })
}

fn get_millis(name: &str, default: u64) -> u64 {
    match env::var(name).map(|value| value.parse::<u64>()) {
        Ok(Ok(value)) if value > 0 => value,
        _ => default,
    }
}
