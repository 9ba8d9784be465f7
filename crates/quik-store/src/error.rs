//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using a key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying file I/O failed.
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to (de)serialize a stored value.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
