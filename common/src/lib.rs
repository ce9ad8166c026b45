pub mod convert;
pub mod dtos;
pub mod error;
pub mod files;
pub mod models;
pub mod pdfservices;
pub mod persistence;
pub mod state;
pub mod util;

pub use error::{Error, ErrorKind, Result};
