//! Store error types.

use thiserror::Error;

/// Configuration store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid block id: {0:?}")]
    InvalidBlockId(String),
}
