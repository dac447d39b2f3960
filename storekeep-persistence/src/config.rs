//! Persistence configuration.

use serde::{Deserialize, Serialize};
use storekeep_storage::DEFAULT_SERVICE;

/// Storage key holding the purchased product list.
pub const DEFAULT_PURCHASES_KEY: &str = "transactions";

/// Where the ledger lives in secure storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistenceConfig {
    /// Secure storage service namespace.
    pub service: String,
    /// Key of the purchased product list within the service.
    pub purchases_key: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            service: DEFAULT_SERVICE.to_string(),
            purchases_key: DEFAULT_PURCHASES_KEY.to_string(),
        }
    }
}
