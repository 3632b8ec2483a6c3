// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the I/O and presentation layers. The counting core itself
/// is infallible and has no variant here.
#[derive(Debug, Error)]
pub enum SyllableError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to serialize results: {0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, SyllableError>;
