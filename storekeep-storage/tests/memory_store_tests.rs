use storekeep_storage::{validate_key, MemoryStore, SecureStore, StorageError};

// ── Basic contract ──────────────────────────────────────────────

#[test]
fn absent_key_reads_none() {
    let store = MemoryStore::new();
    assert!(store.get_bytes("transactions").unwrap().is_none());
    assert!(store.is_empty());
}

#[test]
fn set_then_get() {
    let store = MemoryStore::new();
    store.set_bytes("transactions", b"[\"a\"]").unwrap();
    assert_eq!(store.get_bytes("transactions").unwrap().unwrap(), b"[\"a\"]");
    assert!(store.contains("transactions"));
    assert_eq!(store.len(), 1);
}

#[test]
fn set_replaces_previous_value() {
    let store = MemoryStore::with_entry("k", b"old".to_vec());
    store.set_bytes("k", b"new").unwrap();
    assert_eq!(store.get_bytes("k").unwrap().unwrap(), b"new");
    assert_eq!(store.len(), 1);
}

#[test]
fn remove_deletes_entry() {
    let store = MemoryStore::with_entry("k", b"v".to_vec());
    store.remove_bytes("k").unwrap();
    assert!(!store.contains("k"));
    assert!(store.get_bytes("k").unwrap().is_none());
}

#[test]
fn remove_absent_key_is_ok() {
    let store = MemoryStore::new();
    assert!(store.remove_bytes("missing").is_ok());
}

// ── Key validation ──────────────────────────────────────────────

#[test]
fn invalid_keys_rejected() {
    let store = MemoryStore::new();
    for key in ["", ".hidden", "a/b", "../up", "sp ace"] {
        assert!(
            matches!(store.set_bytes(key, b"x"), Err(StorageError::InvalidKey(_))),
            "{key:?} should be rejected"
        );
    }
}

#[test]
fn valid_keys_accepted() {
    for key in ["transactions", "a.b", "A-1_z"] {
        assert!(validate_key(key).is_ok(), "{key:?} should be accepted");
    }
}

#[test]
fn error_display() {
    let err = StorageError::InvalidKey("a/b".into());
    assert!(format!("{err}").contains("a/b"));

    let err = StorageError::Encryption("locked".into());
    assert!(format!("{err}").contains("encryption error"));

    let io: StorageError = std::io::Error::other("disk full").into();
    assert!(format!("{io}").contains("disk full"));
}
