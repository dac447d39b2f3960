//! Error types for the persistence layer.
//!
//! These never reach callers of [`StorePersistence`](crate::StorePersistence);
//! they exist so internal failures can be logged with their cause.

use storekeep_storage::StorageError;
use thiserror::Error;

/// Result type for internal persistence operations.
pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// Errors raised while reading or writing the ledger.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Secure storage failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Stored payload is not a JSON array of strings, or could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
