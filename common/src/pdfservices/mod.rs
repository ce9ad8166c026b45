pub mod assets;
pub mod base;
pub mod jobs;
