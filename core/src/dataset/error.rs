//! Error types for dataset loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading the film dataset. All of these are fatal at
/// startup; no partial dataset is ever served.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to open dataset file {path}")]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read CSV headers from {path}")]
    ReadHeaders {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("dataset {path} is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("failed to read CSV record from {path}")]
    ReadRecord {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
