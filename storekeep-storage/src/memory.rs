//! In-memory secure store.

use crate::error::StorageResult;
use crate::store::{validate_key, SecureStore};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Process-local [`SecureStore`]. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    pub fn with_entry(key: &str, bytes: impl Into<Vec<u8>>) -> Self {
        let store = Self::new();
        store.lock().insert(key.to_string(), bytes.into());
        store
    }

    /// Returns true if `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SecureStore for MemoryStore {
    fn get_bytes(&self, key: &str) -> StorageResult<Option<Vec<u8>>> {
        validate_key(key)?;
        Ok(self.lock().get(key).cloned())
    }

    fn set_bytes(&self, key: &str, bytes: &[u8]) -> StorageResult<()> {
        validate_key(key)?;
        self.lock().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove_bytes(&self, key: &str) -> StorageResult<()> {
        validate_key(key)?;
        self.lock().remove(key);
        Ok(())
    }
}
