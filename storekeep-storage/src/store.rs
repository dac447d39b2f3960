//! The secure storage contract.

use crate::error::{StorageError, StorageResult};

/// Keychain-like byte storage scoped to one service namespace.
///
/// Implementations must be safe to share across threads. Calls may block
/// on I/O.
pub trait SecureStore: Send + Sync {
    /// Reads the bytes stored under `key`, or `None` if absent.
    fn get_bytes(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    /// Stores `bytes` under `key`, replacing any previous value.
    fn set_bytes(&self, key: &str, bytes: &[u8]) -> StorageResult<()>;

    /// Removes `key`. Removing an absent key succeeds.
    fn remove_bytes(&self, key: &str) -> StorageResult<()>;
}

/// Checks that `key` is non-empty, does not start with `.`, and only uses
/// `[A-Za-z0-9._-]`.
pub fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
