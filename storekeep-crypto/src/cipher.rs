//! Payload encryption using ChaCha20-Poly1305.
//!
//! Provides authenticated encryption with associated data (AEAD). The
//! associated data ("context") is not stored; the reader must supply the
//! same context to decrypt.

use crate::error::{CryptoError, CryptoResult};
use crate::key::StorageKey;
use chacha20poly1305::{
    aead::{Aead, KeyInit, Payload},
    ChaCha20Poly1305, Nonce,
};
use rand::RngCore;

/// Size of nonce in bytes (96 bits for ChaCha20-Poly1305).
pub const NONCE_SIZE: usize = 12;

/// Size of authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// Encrypted data with the nonce needed for decryption.
#[derive(Clone, Debug)]
pub struct EncryptedData {
    /// The nonce used for encryption (unique per encryption).
    pub nonce: [u8; NONCE_SIZE],
    /// The encrypted ciphertext (includes auth tag).
    pub ciphertext: Vec<u8>,
}

impl EncryptedData {
    /// Returns the total size of the encrypted data.
    pub fn len(&self) -> usize {
        NONCE_SIZE + self.ciphertext.len()
    }

    /// Returns true if the ciphertext is empty.
    pub fn is_empty(&self) -> bool {
        self.ciphertext.is_empty()
    }

    /// Encodes as `nonce || ciphertext` for storage.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len());
        bytes.extend_from_slice(&self.nonce);
        bytes.extend_from_slice(&self.ciphertext);
        bytes
    }

    /// Decodes from `nonce || ciphertext`.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() < NONCE_SIZE + TAG_SIZE {
            return Err(CryptoError::Decryption("data too short".to_string()));
        }

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&bytes[..NONCE_SIZE]);
        let ciphertext = bytes[NONCE_SIZE..].to_vec();

        Ok(Self { nonce, ciphertext })
    }
}

/// Encrypts plaintext using ChaCha20-Poly1305 with no associated data.
pub fn encrypt(key: &StorageKey, plaintext: &[u8]) -> CryptoResult<EncryptedData> {
    encrypt_with_context(key, plaintext, &[])
}

/// Decrypts ciphertext produced by [`encrypt`].
pub fn decrypt(key: &StorageKey, encrypted: &EncryptedData) -> CryptoResult<Vec<u8>> {
    decrypt_with_context(key, encrypted, &[])
}

/// Encrypts plaintext, binding it to `context` as associated data.
///
/// # Arguments
/// * `key` - The encryption key
/// * `plaintext` - Data to encrypt
/// * `context` - Associated data that must be presented again on decryption
pub fn encrypt_with_context(
    key: &StorageKey,
    plaintext: &[u8],
    context: &[u8],
) -> CryptoResult<EncryptedData> {
    let cipher = ChaCha20Poly1305::new(key.as_bytes().into());

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let ciphertext = cipher
        .encrypt(
            nonce,
            Payload {
                msg: plaintext,
                aad: context,
            },
        )
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    Ok(EncryptedData {
        nonce: nonce_bytes,
        ciphertext,
    })
}

/// Decrypts ciphertext produced by [`encrypt_with_context`].
///
/// Fails if the key, the context or the ciphertext differ from encryption.
pub fn decrypt_with_context(
    key: &StorageKey,
    encrypted: &EncryptedData,
    context: &[u8],
) -> CryptoResult<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(key.as_bytes().into());
    let nonce = Nonce::from_slice(&encrypted.nonce);

    cipher
        .decrypt(
            nonce,
            Payload {
                msg: encrypted.ciphertext.as_ref(),
                aad: context,
            },
        )
        .map_err(|_| {
            CryptoError::Decryption("decryption failed (wrong key or tampered data)".to_string())
        })
}
