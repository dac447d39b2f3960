//! The shared purchase persistence instance.

use crate::cache::ProductCache;
use crate::config::PersistenceConfig;
use crate::ledger::{LedgerState, PurchaseLedger};
use crate::lookup::ProductLookup;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use storekeep_crypto::DataEncryptor;
use storekeep_storage::{EncryptedFileStore, FileStoreConfig, SecureStore, StorageResult};
use storekeep_types::{ProductId, ProductRecord};
use tokio::sync::Mutex as AsyncMutex;
use tracing::info;

/// Purchase ledger, product cache and subscription flag behind one handle.
///
/// Create one at startup and share it as `Arc<StorePersistence>`. Ledger
/// calls are synchronous and serialized by a mutex. Product resolution holds
/// an async mutex for its whole body, remote lookup included, so concurrent
/// resolutions never fetch the same uncached id twice.
pub struct StorePersistence {
    subscription_active: AtomicBool,
    ledger: Mutex<PurchaseLedger>,
    products: AsyncMutex<ProductCache>,
    lookup: Arc<dyn ProductLookup>,
}

impl StorePersistence {
    /// Creates an instance over an existing secure store.
    ///
    /// `store` is already scoped to its service namespace, so only
    /// `config.purchases_key` applies here. `config.service` picks the
    /// directory in [`open_encrypted`](Self::open_encrypted).
    pub fn new(
        store: Arc<dyn SecureStore>,
        lookup: Arc<dyn ProductLookup>,
        config: &PersistenceConfig,
    ) -> Self {
        Self {
            subscription_active: AtomicBool::new(false),
            ledger: Mutex::new(PurchaseLedger::new(store, config.purchases_key.clone())),
            products: AsyncMutex::new(ProductCache::new()),
            lookup,
        }
    }

    /// Creates an instance whose ledger lives in an [`EncryptedFileStore`]
    /// under `root`, using the configured service namespace.
    pub fn open_encrypted(
        root: impl Into<PathBuf>,
        encryptor: Arc<dyn DataEncryptor>,
        lookup: Arc<dyn ProductLookup>,
        config: &PersistenceConfig,
    ) -> StorageResult<Self> {
        let store_config = FileStoreConfig::new(root).with_service(config.service.clone());
        let store = EncryptedFileStore::open(store_config, encryptor)?;
        info!("Opened encrypted purchase store at {:?}", store.dir());
        Ok(Self::new(Arc::new(store), lookup, config))
    }

    // ── Subscription ────────────────────────────────────────────

    /// Whether a subscription is currently active. Not persisted.
    pub fn is_subscription_active(&self) -> bool {
        self.subscription_active.load(Ordering::Acquire)
    }

    /// Set by the transaction flow after it verifies a subscription.
    pub fn set_subscription_active(&self, active: bool) {
        self.subscription_active.store(active, Ordering::Release);
    }

    // ── Ledger ──────────────────────────────────────────────────

    /// Returns true if `id` has been purchased. Blank ids are never purchased.
    pub fn is_purchased(&self, id: &ProductId) -> bool {
        if id.is_blank() {
            return false;
        }
        self.ledger().is_purchased(id)
    }

    /// Records a confirmed purchase. Returns true if it was new.
    pub fn record_purchase(&self, id: &ProductId) -> bool {
        if id.is_blank() {
            return false;
        }
        self.ledger().record_purchase(id)
    }

    /// Owned product ids in purchase order.
    pub fn purchased_products(&self) -> Vec<ProductId> {
        self.ledger().purchased()
    }

    /// Forgets every recorded purchase, in memory and in storage.
    pub fn clear_purchases(&self) {
        self.ledger().clear();
    }

    /// Rewrites the stored purchase list from memory.
    pub fn persist_purchases(&self) {
        self.ledger().persist();
    }

    /// Load state of the ledger.
    pub fn ledger_state(&self) -> LedgerState {
        self.ledger().state()
    }

    fn ledger(&self) -> MutexGuard<'_, PurchaseLedger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ── Products ────────────────────────────────────────────────

    /// Resolves one product, from cache when possible.
    pub async fn resolve_product(&self, id: &ProductId) -> Option<ProductRecord> {
        if id.is_blank() {
            return None;
        }
        let mut products = self.products.lock().await;
        products.resolve_one(id, self.lookup.as_ref()).await
    }

    /// Resolves several products, fetching only the uncached ones.
    pub async fn resolve_products(&self, ids: &HashSet<ProductId>) -> HashSet<ProductRecord> {
        if ids.is_empty() {
            return HashSet::new();
        }
        let mut products = self.products.lock().await;
        products.resolve_many(ids, self.lookup.as_ref()).await
    }

    /// Cached record for `id`, without a remote lookup.
    pub async fn cached_product(&self, id: &ProductId) -> Option<ProductRecord> {
        self.products.lock().await.get(id).cloned()
    }

    /// Number of cached product records.
    pub async fn cached_product_count(&self) -> usize {
        self.products.lock().await.len()
    }
}

impl std::fmt::Debug for StorePersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorePersistence")
            .field("subscription_active", &self.is_subscription_active())
            .finish_non_exhaustive()
    }
}
