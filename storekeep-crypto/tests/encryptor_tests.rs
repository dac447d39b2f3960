use storekeep_crypto::{
    StorageKey, CipherEncryptor, DataEncryptor, EncryptorError, PassthroughEncryptor,
    NONCE_SIZE, TAG_SIZE,
};

// ── EncryptorError Display ──────────────────────────────────────

#[test]
fn encryptor_error_display_unavailable() {
    let msg = format!("{}", EncryptorError::Unavailable);
    assert!(msg.contains("unavailable"));
    assert!(msg.contains("locked"));
}

#[test]
fn encryptor_error_display_crypto() {
    let msg = format!("{}", EncryptorError::Crypto("bad cipher".into()));
    assert!(msg.contains("crypto error"));
    assert!(msg.contains("bad cipher"));
}

// ── PassthroughEncryptor ────────────────────────────────────────

#[test]
fn passthrough_is_identity() {
    let enc = PassthroughEncryptor;
    assert!(enc.is_available());
    assert_eq!(enc.encrypt_bytes("k", b"hello").unwrap(), b"hello");
    assert_eq!(enc.decrypt_bytes("k", b"hello").unwrap(), b"hello");
}

// ── CipherEncryptor ─────────────────────────────────────────────

#[test]
fn cipher_roundtrip() {
    let enc = CipherEncryptor::new(StorageKey::generate());
    let blob = enc.encrypt_bytes("transactions", b"[\"a\"]").unwrap();
    assert_eq!(blob.len(), NONCE_SIZE + 5 + TAG_SIZE);
    assert_eq!(enc.decrypt_bytes("transactions", &blob).unwrap(), b"[\"a\"]");
}

#[test]
fn cipher_output_hides_plaintext() {
    let enc = CipherEncryptor::new(StorageKey::generate());
    let blob = enc.encrypt_bytes("k", b"com.example.pro").unwrap();
    assert!(!blob.windows(15).any(|w| w == b"com.example.pro"));
}

#[test]
fn cipher_rejects_other_context() {
    let enc = CipherEncryptor::new(StorageKey::generate());
    let blob = enc.encrypt_bytes("transactions", b"data").unwrap();
    let err = enc.decrypt_bytes("other", &blob).unwrap_err();
    assert!(matches!(err, EncryptorError::Crypto(_)));
}

#[test]
fn cipher_rejects_truncated_blob() {
    let enc = CipherEncryptor::new(StorageKey::generate());
    assert!(enc.decrypt_bytes("k", b"short").is_err());
}

#[test]
fn locked_encryptor_is_unavailable() {
    let enc = CipherEncryptor::locked();
    assert!(!enc.is_available());
    assert!(matches!(
        enc.encrypt_bytes("k", b"x"),
        Err(EncryptorError::Unavailable)
    ));
    assert!(matches!(
        enc.decrypt_bytes("k", b"x"),
        Err(EncryptorError::Unavailable)
    ));
}

#[test]
fn lock_and_unlock() {
    let key = StorageKey::generate();
    let enc = CipherEncryptor::new(key.clone());
    let blob = enc.encrypt_bytes("k", b"data").unwrap();

    enc.lock();
    assert!(!enc.is_available());
    assert!(enc.decrypt_bytes("k", &blob).is_err());

    enc.unlock(key);
    assert!(enc.is_available());
    assert_eq!(enc.decrypt_bytes("k", &blob).unwrap(), b"data");
}

#[test]
fn different_keys_do_not_interoperate() {
    let a = CipherEncryptor::new(StorageKey::generate());
    let b = CipherEncryptor::new(StorageKey::generate());
    let blob = a.encrypt_bytes("k", b"data").unwrap();
    assert!(b.decrypt_bytes("k", &blob).is_err());
}
