use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Session,
    Transport,
    Service,
    Usage,
    LocalIo,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("could not create execution context: {0}")]
    Session(String),

    #[error("{message}")]
    Transport {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    #[error("service rejected request with status {status}: {message}")]
    Service { status: u16, code: Option<String>, message: String },

    #[error("usage limit reached with status {status}: {message}")]
    Usage { status: u16, code: Option<String>, message: String },

    #[error("could not access '{}'", path.display())]
    LocalIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Config(_) => ErrorKind::Config,
            Error::Session(_) => ErrorKind::Session,
            Error::Transport { .. } => ErrorKind::Transport,
            Error::Service { .. } => ErrorKind::Service,
            Error::Usage { .. } => ErrorKind::Usage,
            Error::LocalIo { .. } => ErrorKind::LocalIo,
        }
    }

    /// Process exit status for this failure, distinct per kind.
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::Config => 2,
            ErrorKind::Session => 3,
            ErrorKind::Transport => 4,
            ErrorKind::Service => 5,
            ErrorKind::Usage => 6,
            ErrorKind::LocalIo => 7,
        }
    }

    pub fn transport(message: impl Into<String>, source: reqwest::Error) -> Self {
        Error::Transport {
            message: message.into(),
            source: Some(source),
        }
    }

    pub fn local_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::LocalIo { path: path.into(), source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct_per_kind() {
        let errors = vec![
            Error::Config("x".into()),
            Error::Session("x".into()),
            Error::Transport { message: "x".into(), source: None },
            Error::Service { status: 400, code: None, message: "x".into() },
            Error::Usage { status: 429, code: None, message: "x".into() },
            Error::local_io("x", io::Error::from(io::ErrorKind::NotFound)),
        ];
        let mut codes: Vec<u8> = errors.iter().map(Error::exit_code).collect();
        assert!(codes.iter().all(|code| *code != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 6);
    }

    #[test]
    fn local_io_message_names_path() {
        let err = Error::local_io("output/result.pdf", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.kind(), ErrorKind::LocalIo);
        assert!(err.to_string().contains("output/result.pdf"));
    }
}
