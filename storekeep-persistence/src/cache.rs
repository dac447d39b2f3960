//! In-memory product metadata cache.
//!
//! Resolution splits a request into ids already cached and ids still
//! missing ([`reconcile`]), asks the remote lookup once for the missing ids
//! only, and merges whatever comes back. The cache never evicts.

use crate::lookup::ProductLookup;
use std::collections::{HashMap, HashSet};
use storekeep_types::{ProductId, ProductRecord};
use tracing::debug;

/// Outcome of splitting a request against the cache.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Cached records for requested ids.
    pub hits: HashSet<ProductRecord>,
    /// Requested ids with no cached record.
    pub missing: HashSet<ProductId>,
}

impl Reconciliation {
    /// True when every requested id was cached.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Splits `requested` into cached records and missing ids.
pub fn reconcile(
    requested: &HashSet<ProductId>,
    cached: &HashMap<ProductId, ProductRecord>,
) -> Reconciliation {
    let mut result = Reconciliation::default();
    for id in requested {
        match cached.get(id) {
            Some(record) => {
                result.hits.insert(record.clone());
            }
            None => {
                result.missing.insert(id.clone());
            }
        }
    }
    result
}

/// Session-scoped map from product id to product record.
///
/// Every key maps to a record whose own `id` equals the key.
#[derive(Debug, Default)]
pub struct ProductCache {
    entries: HashMap<ProductId, ProductRecord>,
}

impl ProductCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached record for `id`, without any lookup.
    pub fn get(&self, id: &ProductId) -> Option<&ProductRecord> {
        self.entries.get(id)
    }

    /// Stores `record` under its own id, replacing any previous record.
    pub fn insert(&mut self, record: ProductRecord) {
        self.entries.insert(record.id.clone(), record);
    }

    /// Splits `requested` against this cache.
    pub fn reconcile(&self, requested: &HashSet<ProductId>) -> Reconciliation {
        reconcile(requested, &self.entries)
    }

    /// Resolves a single product. Blank ids resolve to `None` without a lookup.
    ///
    /// Records the lookup returns for other ids are cached but never returned.
    pub async fn resolve_one(
        &mut self,
        id: &ProductId,
        lookup: &dyn ProductLookup,
    ) -> Option<ProductRecord> {
        if id.is_blank() {
            return None;
        }
        let requested = HashSet::from([id.clone()]);
        self.resolve_many(&requested, lookup)
            .await
            .into_iter()
            .find(|record| record.id == *id)
    }

    /// Resolves `ids`, calling `lookup` at most once and only for uncached ids.
    ///
    /// Ids the lookup does not know are absent from the result.
    pub async fn resolve_many(
        &mut self,
        ids: &HashSet<ProductId>,
        lookup: &dyn ProductLookup,
    ) -> HashSet<ProductRecord> {
        if ids.is_empty() {
            return HashSet::new();
        }

        let Reconciliation { mut hits, missing } = self.reconcile(ids);
        if missing.is_empty() {
            debug!("All {} product(s) served from cache", hits.len());
            return hits;
        }

        debug!(
            "Fetching {} uncached product(s), {} cached",
            missing.len(),
            hits.len()
        );
        let retrieved = lookup.lookup(&missing).await;
        if retrieved.len() < missing.len() {
            debug!(
                "Lookup returned {} of {} requested product(s)",
                retrieved.len(),
                missing.len()
            );
        }

        for record in &retrieved {
            self.insert(record.clone());
        }
        hits.extend(retrieved);
        hits
    }
}
