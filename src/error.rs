use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the feedback rater.
#[derive(Error, Debug)]
pub enum RaterError {
    /// The input dataset could not be opened or read from disk.
    #[error("failed to read dataset {}: {source}", .path.display())]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input dataset could not be parsed as tabular data.
    #[error("failed to parse dataset {}: {source}", .path.display())]
    DatasetParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The completion service call failed or returned unusable content.
    #[error("completion service error: {0}")]
    ExternalService(String),

    /// Pass-through for CSV errors raised while writing result tables.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Pass-through for JSON serialization errors from the diagnostic sink.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Pass-through for raw I/O errors that do not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RaterError>;
