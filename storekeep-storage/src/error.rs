//! Error types for the storage layer.

use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur in storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters the backend cannot store.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Encryption/decryption error.
    #[error("encryption error: {0}")]
    Encryption(String),
}
