use std::collections::HashSet;
use storekeep_types::ProductId;

// ── Construction ────────────────────────────────────────────────

#[test]
fn product_id_from_str_and_string_agree() {
    let a = ProductId::from("com.example.pro");
    let b = ProductId::from("com.example.pro".to_string());
    assert_eq!(a, b);
    assert_eq!(a, ProductId::new("com.example.pro"));
}

#[test]
fn product_id_display_is_raw_identifier() {
    let id = ProductId::new("com.example.pro");
    assert_eq!(id.to_string(), "com.example.pro");
    assert_eq!(id.as_str(), "com.example.pro");
}

#[test]
fn product_id_into_inner() {
    let id = ProductId::new("abc");
    assert_eq!(id.into_inner(), "abc");
}

// ── Blank detection ─────────────────────────────────────────────

#[test]
fn empty_id_is_blank() {
    assert!(ProductId::new("").is_blank());
}

#[test]
fn whitespace_id_is_blank() {
    assert!(ProductId::new("  \t\n").is_blank());
}

#[test]
fn regular_id_is_not_blank() {
    assert!(!ProductId::new("com.example.pro").is_blank());
    assert!(!ProductId::new(" x ").is_blank());
}

// ── Serde ───────────────────────────────────────────────────────

#[test]
fn product_id_serializes_as_plain_string() {
    let id = ProductId::new("com.example.pro");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, r#""com.example.pro""#);
}

#[test]
fn product_id_list_matches_string_array_layout() {
    let ids = vec![ProductId::new("a"), ProductId::new("b")];
    let json = serde_json::to_string(&ids).unwrap();
    assert_eq!(json, r#"["a","b"]"#);

    let parsed: Vec<ProductId> = serde_json::from_str(r#"["x","y"]"#).unwrap();
    assert_eq!(parsed, vec![ProductId::new("x"), ProductId::new("y")]);
}

#[test]
fn product_id_rejects_non_string_json() {
    assert!(serde_json::from_str::<ProductId>("42").is_err());
    assert!(serde_json::from_str::<Vec<ProductId>>(r#"{"a":1}"#).is_err());
}

// ── Borrow ──────────────────────────────────────────────────────

#[test]
fn hash_set_lookup_by_str() {
    let mut set = HashSet::new();
    set.insert(ProductId::new("com.example.pro"));
    assert!(set.contains("com.example.pro"));
    assert!(!set.contains("com.example.lite"));
}
