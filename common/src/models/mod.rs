mod credentials;
pub use credentials::*;

mod config;
pub use config::*;
