//! Storage keys.
//!
//! A [`StorageKey`] is a 256-bit ChaCha20 key. The key bytes are wiped from
//! memory when the key is dropped and never appear in `Debug` output.

use crate::error::{CryptoError, CryptoResult};
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of a storage key in bytes.
pub const KEY_SIZE: usize = 32;

/// Symmetric key protecting one secure store.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct StorageKey([u8; KEY_SIZE]);

impl StorageKey {
    /// Fresh key from the operating system RNG.
    pub fn generate() -> Self {
        let mut key = Self([0u8; KEY_SIZE]);
        rand::rngs::OsRng.fill_bytes(&mut key.0);
        key
    }

    /// Wraps key material handed over by the platform keystore.
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Like [`from_bytes`](Self::from_bytes), for material of unchecked length.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != KEY_SIZE {
            return Err(CryptoError::InvalidKeyLength {
                expected: KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut key = Self([0u8; KEY_SIZE]);
        key.0.copy_from_slice(bytes);
        Ok(key)
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl PartialEq for StorageKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().zip(other.0.iter()).fold(0u8, |acc, (a, b)| acc | (a ^ b)) == 0
    }
}

impl Eq for StorageKey {}

impl std::fmt::Debug for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("StorageKey(..)")
    }
}
