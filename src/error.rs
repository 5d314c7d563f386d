use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the explorer library
#[derive(Debug, Error)]
pub enum ExploreError {
    #[error("trip data file not found: {}", path.display())]
    MissingData { path: PathBuf },

    #[error("malformed trip data in {} (line {line}): {reason}", path.display())]
    Malformed {
        path: PathBuf,
        line: u64,
        reason: String,
    },

    #[error("input closed before a choice was made")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExploreError>;
