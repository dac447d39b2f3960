//! The ownership ledger: which products the user has bought.
//!
//! Entries are loaded lazily from secure storage on first access and
//! persisted as a JSON array of strings after every new purchase. Storage
//! problems are logged and otherwise ignored: an unreadable record counts as
//! "no purchases", a failed write leaves the in-memory list authoritative.

use crate::error::PersistenceResult;
use std::collections::HashSet;
use std::sync::Arc;
use storekeep_storage::SecureStore;
use storekeep_types::ProductId;
use tracing::{debug, info, warn};

/// Observable load state of a [`PurchaseLedger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerState {
    /// Storage has not been read yet.
    Unloaded,
    /// Entries are in memory.
    Loaded,
    /// Explicitly cleared; behaves as loaded and empty.
    Cleared,
}

#[derive(Debug)]
enum Entries {
    Unloaded,
    Loaded(Vec<ProductId>),
    Cleared,
}

/// Durable list of purchased product identifiers.
pub struct PurchaseLedger {
    store: Arc<dyn SecureStore>,
    key: String,
    entries: Entries,
}

impl PurchaseLedger {
    /// Creates an unloaded ledger backed by `store` under `key`.
    pub fn new(store: Arc<dyn SecureStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            entries: Entries::Unloaded,
        }
    }

    /// Current load state.
    pub fn state(&self) -> LedgerState {
        match self.entries {
            Entries::Unloaded => LedgerState::Unloaded,
            Entries::Loaded(_) => LedgerState::Loaded,
            Entries::Cleared => LedgerState::Cleared,
        }
    }

    /// Returns true if `id` has been purchased.
    ///
    /// A blank id is never purchased and does not touch storage.
    pub fn is_purchased(&mut self, id: &ProductId) -> bool {
        if id.is_blank() {
            return false;
        }
        self.entries().contains(id)
    }

    /// Records a confirmed purchase and persists the ledger.
    ///
    /// Returns true if `id` was newly added. Blank ids and ids already
    /// present are ignored.
    pub fn record_purchase(&mut self, id: &ProductId) -> bool {
        if id.is_blank() {
            return false;
        }

        let entries = self.entries_mut();
        if entries.contains(id) {
            return false;
        }
        entries.push(id.clone());
        info!("Recorded purchase of {id}");

        self.persist();
        true
    }

    /// Owned product ids in purchase order.
    pub fn purchased(&mut self) -> Vec<ProductId> {
        self.entries().to_vec()
    }

    /// Removes the durable record and empties the ledger.
    ///
    /// The ledger stays cleared: later reads do not go back to storage.
    pub fn clear(&mut self) {
        if let Err(e) = self.store.remove_bytes(&self.key) {
            warn!("Failed to remove stored purchases: {e}");
        }
        self.entries = Entries::Cleared;
        debug!("Purchase ledger cleared");
    }

    /// Writes the in-memory list to storage. No-op while unloaded.
    pub fn persist(&self) {
        let entries: &[ProductId] = match &self.entries {
            Entries::Unloaded => return,
            Entries::Loaded(entries) => entries,
            Entries::Cleared => &[],
        };

        match self.write(entries) {
            Ok(()) => debug!("Persisted {} purchase(s)", entries.len()),
            Err(e) => warn!("Failed to persist purchases, keeping in-memory state: {e}"),
        }
    }

    fn entries(&mut self) -> &[ProductId] {
        if let Entries::Unloaded = self.entries {
            self.entries = Entries::Loaded(self.load());
        }
        match &self.entries {
            Entries::Loaded(entries) => entries,
            Entries::Unloaded | Entries::Cleared => &[],
        }
    }

    fn entries_mut(&mut self) -> &mut Vec<ProductId> {
        match self.entries {
            Entries::Unloaded => self.entries = Entries::Loaded(self.load()),
            Entries::Cleared => self.entries = Entries::Loaded(Vec::new()),
            Entries::Loaded(_) => {}
        }
        match &mut self.entries {
            Entries::Loaded(entries) => entries,
            Entries::Unloaded | Entries::Cleared => unreachable!("ledger entries loaded above"),
        }
    }

    /// Reads storage, falling back to an empty list on any failure.
    ///
    /// Nothing is written back, so a corrupt record stays on disk.
    fn load(&self) -> Vec<ProductId> {
        match self.read() {
            Ok(Some(stored)) => {
                let entries = dedup_entries(stored);
                debug!("Loaded {} purchase(s) from storage", entries.len());
                entries
            }
            Ok(None) => {
                debug!("No stored purchases");
                Vec::new()
            }
            Err(e) => {
                warn!("Stored purchases unreadable, assuming none: {e}");
                Vec::new()
            }
        }
    }

    fn read(&self) -> PersistenceResult<Option<Vec<ProductId>>> {
        let Some(bytes) = self.store.get_bytes(&self.key)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn write(&self, entries: &[ProductId]) -> PersistenceResult<()> {
        let bytes = serde_json::to_vec(entries)?;
        self.store.set_bytes(&self.key, &bytes)?;
        Ok(())
    }
}

impl std::fmt::Debug for PurchaseLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PurchaseLedger")
            .field("key", &self.key)
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

/// Drops blank and repeated ids, keeping the first occurrence.
fn dedup_entries(stored: Vec<ProductId>) -> Vec<ProductId> {
    let mut seen = HashSet::new();
    stored
        .into_iter()
        .filter(|id| !id.is_blank() && seen.insert(id.clone()))
        .collect()
}
