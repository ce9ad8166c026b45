use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};

pub const OUTPUT_DIRECTORY: &str = "output";
pub const SAMPLE_NAME: &str = "CreatePDFWithProxyServer";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// Relative output path for a result created at `now`.
///
/// Second resolution only: two results created within the same second share
/// a path and the later one overwrites the earlier.
pub fn create_output_file_path_at(now: NaiveDateTime) -> PathBuf {
    PathBuf::from(OUTPUT_DIRECTORY)
        .join(SAMPLE_NAME)
        .join(format!("create{}.pdf", now.format(TIMESTAMP_FORMAT)))
}

pub fn create_output_file_path() -> PathBuf {
    create_output_file_path_at(Local::now().naive_local())
}
