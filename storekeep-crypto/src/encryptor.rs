//! Abstract encryption interface for secure storage backends.
//!
//! Stores depend on `Arc<dyn DataEncryptor>` and never see raw keys.
//! [`CipherEncryptor`] holds the storage key and can be locked; tests use
//! [`PassthroughEncryptor`] for zero-overhead operation without a key.

use crate::cipher::{self, EncryptedData};
use crate::key::StorageKey;
use std::sync::{PoisonError, RwLock};
use thiserror::Error;

/// Errors from the encryption layer.
#[derive(Debug, Error)]
pub enum EncryptorError {
    /// The encryptor is locked or no key is available.
    #[error("encryptor unavailable (storage locked)")]
    Unavailable,
    /// Underlying crypto failure.
    #[error("crypto error: {0}")]
    Crypto(String),
}

pub type EncryptorResult<T> = Result<T, EncryptorError>;

/// Trait for encrypting/decrypting opaque byte slices.
///
/// `context` identifies what is being protected (the storage key). A blob
/// only decrypts under the context it was encrypted with.
pub trait DataEncryptor: Send + Sync {
    /// Encrypt `data`, returning an opaque ciphertext blob.
    fn encrypt_bytes(&self, context: &str, data: &[u8]) -> EncryptorResult<Vec<u8>>;

    /// Decrypt a blob previously produced by `encrypt_bytes` with the same context.
    fn decrypt_bytes(&self, context: &str, data: &[u8]) -> EncryptorResult<Vec<u8>>;

    /// Whether the encryptor currently holds a key.
    fn is_available(&self) -> bool;
}

/// No-op encryptor for tests. Data passes through unchanged.
pub struct PassthroughEncryptor;

impl DataEncryptor for PassthroughEncryptor {
    fn encrypt_bytes(&self, _context: &str, data: &[u8]) -> EncryptorResult<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn decrypt_bytes(&self, _context: &str, data: &[u8]) -> EncryptorResult<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn is_available(&self) -> bool {
        true
    }
}

/// ChaCha20-Poly1305 encryptor holding a single storage key.
///
/// Blobs are laid out as `nonce || ciphertext+tag`.
pub struct CipherEncryptor {
    key: RwLock<Option<StorageKey>>,
}

impl CipherEncryptor {
    /// Creates an unlocked encryptor.
    pub fn new(key: StorageKey) -> Self {
        Self {
            key: RwLock::new(Some(key)),
        }
    }

    /// Creates an encryptor with no key; every operation fails until [`unlock`](Self::unlock).
    pub fn locked() -> Self {
        Self {
            key: RwLock::new(None),
        }
    }

    /// Installs the storage key.
    pub fn unlock(&self, key: StorageKey) {
        *self.key.write().unwrap_or_else(PoisonError::into_inner) = Some(key);
    }

    /// Drops the storage key. The key bytes are zeroized on drop.
    pub fn lock(&self) {
        self.key.write().unwrap_or_else(PoisonError::into_inner).take();
    }

    fn with_key<T>(&self, f: impl FnOnce(&StorageKey) -> EncryptorResult<T>) -> EncryptorResult<T> {
        let guard = self.key.read().unwrap_or_else(PoisonError::into_inner);
        let key = guard.as_ref().ok_or(EncryptorError::Unavailable)?;
        f(key)
    }
}

impl DataEncryptor for CipherEncryptor {
    fn encrypt_bytes(&self, context: &str, data: &[u8]) -> EncryptorResult<Vec<u8>> {
        self.with_key(|key| {
            cipher::encrypt_with_context(key, data, context.as_bytes())
                .map(|encrypted| encrypted.to_bytes())
                .map_err(|e| EncryptorError::Crypto(e.to_string()))
        })
    }

    fn decrypt_bytes(&self, context: &str, data: &[u8]) -> EncryptorResult<Vec<u8>> {
        self.with_key(|key| {
            let encrypted =
                EncryptedData::from_bytes(data).map_err(|e| EncryptorError::Crypto(e.to_string()))?;
            cipher::decrypt_with_context(key, &encrypted, context.as_bytes())
                .map_err(|e| EncryptorError::Crypto(e.to_string()))
        })
    }

    fn is_available(&self) -> bool {
        self.key
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
