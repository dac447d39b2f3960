//! At-rest encryption for StoreKeep.
//!
//! Secure storage backends never see raw keys: they encrypt through a
//! [`DataEncryptor`], which owns the key material. The building blocks are:
//!
//! - **Cipher**: ChaCha20-Poly1305 AEAD with a random 96-bit nonce per write
//! - **Keys**: 256-bit [`StorageKey`]s, generated locally or supplied by the platform keystore
//! - **Encryptors**: [`CipherEncryptor`] for real data, [`PassthroughEncryptor`] for tests

mod cipher;
mod encryptor;
mod error;
mod key;

pub use cipher::{
    decrypt, decrypt_with_context, encrypt, encrypt_with_context, EncryptedData, NONCE_SIZE,
    TAG_SIZE,
};
pub use encryptor::{
    CipherEncryptor, DataEncryptor, EncryptorError, EncryptorResult, PassthroughEncryptor,
};
pub use error::{CryptoError, CryptoResult};
pub use key::{StorageKey, KEY_SIZE};
