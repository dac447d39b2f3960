//! The remote product lookup seam.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use storekeep_types::{ProductId, ProductRecord};

/// Remote catalog returning product metadata for a set of ids.
///
/// Implementations return the subset of requested records they found, in
/// no particular order. Failures and timeouts surface as missing records.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    /// Looks up `ids`.
    async fn lookup(&self, ids: &HashSet<ProductId>) -> HashSet<ProductRecord>;
}

/// Fixed in-memory catalog, for previews and offline builds.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    records: HashMap<ProductId, ProductRecord>,
}

impl StaticCatalog {
    /// Builds a catalog from records, keyed by their own ids.
    pub fn from_records(records: impl IntoIterator<Item = ProductRecord>) -> Self {
        Self {
            records: records
                .into_iter()
                .map(|record| (record.id.clone(), record))
                .collect(),
        }
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl ProductLookup for StaticCatalog {
    async fn lookup(&self, ids: &HashSet<ProductId>) -> HashSet<ProductRecord> {
        ids.iter()
            .filter_map(|id| self.records.get(id).cloned())
            .collect()
    }
}
