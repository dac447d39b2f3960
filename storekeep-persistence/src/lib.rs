//! Purchase ledger and product metadata cache for StoreKeep.
//!
//! Answers two questions for purchase-gated application code:
//! - "has the user bought X?" via the [`PurchaseLedger`], a durable list of
//!   owned product identifiers kept in a [`SecureStore`](storekeep_storage::SecureStore)
//! - "what does product Y look like?" via the [`ProductCache`], which only
//!   asks the remote [`ProductLookup`] for identifiers it has not seen yet
//!
//! # Design Principles
//!
//! - **Availability first**: storage and lookup failures degrade to "fewer
//!   purchases/products known" and are logged, never returned to callers
//! - **Lazy load**: the ledger reads storage at most once per lifetime
//! - **Explicit ownership**: [`StorePersistence`] is created at startup and
//!   shared by `Arc`; there is no global instance
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use storekeep_persistence::{PersistenceConfig, StaticCatalog, StorePersistence};
//! use storekeep_storage::MemoryStore;
//! use storekeep_types::ProductId;
//!
//! let persistence = StorePersistence::new(
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(StaticCatalog::default()),
//!     &PersistenceConfig::default(),
//! );
//!
//! let pro = ProductId::new("com.example.pro");
//! persistence.record_purchase(&pro);
//! assert!(persistence.is_purchased(&pro));
//! ```

mod cache;
mod config;
mod error;
mod ledger;
mod lookup;
mod persistence;

pub use cache::{reconcile, ProductCache, Reconciliation};
pub use config::{PersistenceConfig, DEFAULT_PURCHASES_KEY};
pub use error::{PersistenceError, PersistenceResult};
pub use ledger::{LedgerState, PurchaseLedger};
pub use lookup::{ProductLookup, StaticCatalog};
pub use persistence::StorePersistence;
