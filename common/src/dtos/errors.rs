use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ErrorDto {
    pub code: Option<String>,
    pub message: Option<String>,
    pub status: Option<u16>,
}

/// Error bodies come nested under `error`, as an OAuth pair, or flat.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorBodyDto {
    Nested { error: ErrorDto },
    OAuth { error: String, error_description: Option<String> },
    Flat(ErrorDto),
}

impl ErrorBodyDto {
    pub fn into_error(self) -> ErrorDto {
        match self {
            ErrorBodyDto::Nested { error } => error,
            ErrorBodyDto::OAuth { error, error_description } => ErrorDto {
                message: error_description.or_else(|| Some(error.clone())),
                code: Some(error),
                status: None,
            },
            ErrorBodyDto::Flat(error) => error,
        }
    }
}
