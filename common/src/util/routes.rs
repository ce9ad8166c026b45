pub const DEFAULT_BASE_URI: &str = "https://pdf-services.adobe.io";

fn base(base_uri: &str) -> &str {
    base_uri.trim_end_matches('/')
}

pub fn token_route(base_uri: &str) -> String {
    format!("{}/token", base(base_uri))
}

pub fn assets_route(base_uri: &str) -> String {
    format!("{}/assets", base(base_uri))
}

pub fn operation_route(base_uri: &str, operation: &str) -> String {
    format!("{}/operation/{}", base(base_uri), operation)
}
