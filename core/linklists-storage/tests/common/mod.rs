//! Shared fixtures for storage tests.

#![allow(dead_code)]

use linklists_model::{
    LinkList, LinkListConfiguration, Locality, PluginKind, PluginSlot, Translatability,
    TranslatableLookup,
};
use linklists_storage::LinkListStore;
use linklists_types::Langcode;
use serde_json::Map;

pub fn en() -> Langcode {
    Langcode::parse("en").unwrap()
}

pub fn store() -> LinkListStore {
    LinkListStore::open_in_memory().unwrap()
}

pub fn configuration() -> LinkListConfiguration {
    LinkListConfiguration {
        source: Some(PluginSlot::new("manual_links", Map::new())),
        display: Some(PluginSlot::new("title", Map::new())),
        ..LinkListConfiguration::default()
    }
}

/// An unsaved list with a base title and a valid configuration.
pub fn list(admin_title: &str, title: &str, local: Locality) -> LinkList {
    let mut list = LinkList::new("dynamic", en(), admin_title);
    list.set_title(&en(), Some(title.to_string())).unwrap();
    list.set_local(local);
    list.set_configuration(&en(), configuration(), &NoTranslatables)
        .unwrap();
    list
}

pub fn saved(store: &LinkListStore, admin_title: &str, title: &str, local: Locality) -> LinkList {
    let mut list = list(admin_title, title, local);
    store.save(&mut list).unwrap();
    list
}

pub struct NoTranslatables;

impl TranslatableLookup for NoTranslatables {
    fn translatability(&self, _kind: PluginKind, _plugin_id: &str) -> Option<Translatability> {
        Some(Translatability::NONE)
    }
}
