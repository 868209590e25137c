mod common;

use common::*;
use linklists_model::{ConfigurationError, LinkList, LinkListType, Locality};
use pretty_assertions::assert_eq;

// ── Identity and shared fields ───────────────────────────────────

#[test]
fn new_list_is_unsaved_published_and_unset_local() {
    let list = new_list();
    assert!(list.is_new());
    assert!(list.revision_id().is_none());
    assert!(list.is_published());
    assert_eq!(list.local(), Locality::Unset);
    assert_eq!(list.bundle(), "dynamic");
    assert_eq!(list.label(), "Link list 1");
    assert_eq!(list.created(), list.changed());
}

#[test]
fn translations_share_identity_and_locality() {
    let mut list = new_list();
    list.set_local(Locality::Local);
    list.add_translation(fr()).unwrap();
    list.set_administrative_title(&fr(), "Liste 1").unwrap();
    list.set_title(&fr(), Some("Ma liste".to_string())).unwrap();

    assert_eq!(list.administrative_title(&en()).unwrap(), "Link list 1");
    assert_eq!(list.administrative_title(&fr()).unwrap(), "Liste 1");
    assert_eq!(list.title(&fr()).unwrap(), Some("Ma liste"));
    assert_eq!(list.title(&en()).unwrap(), Some("My link list"));
    assert!(list.local().is_local());

    let languages: Vec<String> = list.translation_languages().map(ToString::to_string).collect();
    assert_eq!(languages, vec!["en", "fr"]);
}

#[test]
fn new_translation_copies_base_titles() {
    let mut list = new_list();
    list.add_translation(fr()).unwrap();
    assert_eq!(list.administrative_title(&fr()).unwrap(), "Link list 1");
    assert_eq!(list.title(&fr()).unwrap(), Some("My link list"));
}

#[test]
fn duplicate_and_base_translations_are_rejected() {
    let mut list = new_list();
    assert!(matches!(
        list.add_translation(en()),
        Err(ConfigurationError::TranslationExists(_))
    ));
    list.add_translation(fr()).unwrap();
    assert!(matches!(
        list.add_translation(fr()),
        Err(ConfigurationError::TranslationExists(_))
    ));
    assert!(matches!(
        list.remove_translation(&en()),
        Err(ConfigurationError::BaseTranslation(_))
    ));
}

// ── Locality ─────────────────────────────────────────────────────

#[test]
fn locality_maps_to_nullable_flag() {
    assert_eq!(Locality::from(None), Locality::Unset);
    assert_eq!(Locality::from(Some(false)), Locality::Global);
    assert_eq!(Locality::from(Some(true)), Locality::Local);
    assert_eq!(Locality::Unset.as_flag(), None);
    assert!(!Locality::Unset.is_local());
    assert!(!Locality::Global.is_local());
}

#[test]
fn locality_serializes_as_nullable_boolean() {
    assert_eq!(serde_json::to_string(&Locality::Unset).unwrap(), "null");
    assert_eq!(serde_json::to_string(&Locality::Local).unwrap(), "true");
    let parsed: Locality = serde_json::from_str("false").unwrap();
    assert_eq!(parsed, Locality::Global);
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn entity_payload_round_trips() {
    let mut list = new_list();
    list.set_configuration(&en(), standard_configuration(), &TestPlugins).unwrap();
    list.add_translation(fr()).unwrap();
    list.set_configuration(&fr(), translate(&standard_configuration()), &TestPlugins)
        .unwrap();

    let json = serde_json::to_string(&list).unwrap();
    let restored: LinkList = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, list);
    assert_eq!(
        restored.configuration(&fr()).unwrap(),
        list.configuration(&fr()).unwrap()
    );
}

// ── Bundles ──────────────────────────────────────────────────────

#[test]
fn fixed_source_bundle_only_allows_its_default() {
    let manual = LinkListType::new("manual", "Manual").with_fixed_source("manual_links");
    assert!(manual.allows_source("manual_links"));
    assert!(!manual.allows_source("rss"));

    let dynamic = LinkListType::new("dynamic", "Dynamic");
    assert!(dynamic.allows_source("rss"));
    assert!(dynamic.default_link_source.is_none());
}

#[test]
fn bundle_defaults_to_configurable_sources() {
    let parsed: LinkListType = serde_json::from_str(r#"{"id": "dynamic"}"#).unwrap();
    assert!(parsed.configurable_link_source_plugins);
}
