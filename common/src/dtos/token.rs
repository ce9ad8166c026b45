use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct TokenRequestDto<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct TokenDto {
    pub access_token: String,
    pub token_type: Option<String>,
    pub expires_in: u64,
}
