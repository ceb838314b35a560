use proptest::prelude::*;
use rolodex_types::CustomerId;
use std::str::FromStr;
use uuid::Uuid;

// ── Construction ─────────────────────────────────────────────────

#[test]
fn new_ids_are_unique() {
    let a = CustomerId::new();
    let b = CustomerId::new();
    assert_ne!(a, b);
}

#[test]
fn v7_ids_are_time_ordered() {
    let a = CustomerId::new();
    let b = CustomerId::new();
    assert!(a.as_uuid() <= b.as_uuid());
}

#[test]
fn from_uuid_roundtrip() {
    let uuid = Uuid::now_v7();
    let id = CustomerId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}

// ── Parsing & display ────────────────────────────────────────────

#[test]
fn parse_display_roundtrip() {
    let id = CustomerId::new();
    let parsed = CustomerId::parse(&id.to_string()).unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn from_str_matches_parse() {
    let id = CustomerId::new();
    let s = id.to_string();
    assert_eq!(CustomerId::from_str(&s).unwrap(), CustomerId::parse(&s).unwrap());
}

#[test]
fn parse_rejects_garbage() {
    assert!(CustomerId::parse("not-a-uuid").is_err());
    assert!(CustomerId::parse("").is_err());
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_plain_string() {
    let id = CustomerId::new();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, format!("\"{id}\""));
}

#[test]
fn deserializes_from_plain_string() {
    let id = CustomerId::new();
    let json = format!("\"{id}\"");
    let back: CustomerId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
}

proptest! {
    #[test]
    fn display_parse_roundtrip_for_any_uuid(bytes in any::<[u8; 16]>()) {
        let id = CustomerId::from_uuid(Uuid::from_bytes(bytes));
        let parsed = CustomerId::parse(&id.to_string()).unwrap();
        prop_assert_eq!(parsed, id);
    }
}
