use linklists_types::{Langcode, LinkListId, RevisionId};
use std::collections::HashSet;
use std::str::FromStr;

// ── LinkListId ────────────────────────────────────────────────────

#[test]
fn link_list_id_new_is_unique() {
    assert_ne!(LinkListId::new(), LinkListId::new());
}

#[test]
fn link_list_id_display_and_parse() {
    let id = LinkListId::new();
    let parsed = LinkListId::parse(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn link_list_id_from_str_invalid() {
    assert!(LinkListId::from_str("garbage").is_err());
}

#[test]
fn link_list_id_hash_and_eq() {
    let id = LinkListId::new();
    let mut set = HashSet::new();
    set.insert(id);
    set.insert(id); // duplicate
    assert_eq!(set.len(), 1);
}

#[test]
fn link_list_id_serializes_as_plain_uuid() {
    let id = LinkListId::parse("0190a8f2-7c3e-7b1a-9d4e-5f6a7b8c9d0e").unwrap();
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"0190a8f2-7c3e-7b1a-9d4e-5f6a7b8c9d0e\"");
    let parsed: LinkListId = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, id);
}

// ── RevisionId ────────────────────────────────────────────────────

#[test]
fn revision_ids_are_time_ordered() {
    let first = RevisionId::new();
    let second = RevisionId::new();
    assert!(first < second);
}

#[test]
fn simple_uuid_form_displays_hyphenated() {
    let id = RevisionId::parse("0190a8f27c3e7b1a9d4e5f6a7b8c9d0e").unwrap();
    assert_eq!(id.to_string(), "0190a8f2-7c3e-7b1a-9d4e-5f6a7b8c9d0e");
}

#[test]
fn revision_id_parse_invalid() {
    assert!(RevisionId::parse("not-a-uuid").is_err());
}

// ── Langcode ──────────────────────────────────────────────────────

#[test]
fn langcode_deserialization_validates() {
    let ok: Langcode = serde_json::from_str("\"EN\"").unwrap();
    assert_eq!(ok.as_str(), "en");
    assert!(serde_json::from_str::<Langcode>("\"12\"").is_err());
}

#[test]
fn langcode_display() {
    assert_eq!(Langcode::parse("fr").unwrap().to_string(), "fr");
}
