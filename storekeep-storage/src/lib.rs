//! Secure byte storage for StoreKeep.
//!
//! The persistence core talks to storage through the [`SecureStore`] trait:
//! a keychain-like get/set/remove of opaque bytes, scoped to one service
//! namespace. Two backends are provided:
//!
//! - [`MemoryStore`]: process-local, for tests and previews
//! - [`EncryptedFileStore`]: one encrypted file per key under
//!   `<root>/<service>/`, written atomically

mod error;
mod file;
mod memory;
mod store;

pub use error::{StorageError, StorageResult};
pub use file::{EncryptedFileStore, FileStoreConfig, DEFAULT_SERVICE};
pub use memory::MemoryStore;
pub use store::{validate_key, SecureStore};
