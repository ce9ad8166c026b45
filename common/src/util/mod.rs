pub mod mime;
pub mod output;
pub mod random;
pub mod routes;
