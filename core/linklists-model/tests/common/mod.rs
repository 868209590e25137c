//! Shared fixtures for model tests.

#![allow(dead_code)]

use linklists_model::{
    LinkList, LinkListConfiguration, PluginKind, PluginSlot, Translatability, TranslatableLookup,
};
use linklists_types::Langcode;
use serde_json::{Map, Value, json};

/// Translatability table mirroring a handful of typical plugins.
pub struct TestPlugins;

impl TranslatableLookup for TestPlugins {
    fn translatability(&self, kind: PluginKind, plugin_id: &str) -> Option<Translatability> {
        match (kind, plugin_id) {
            (PluginKind::Source, "test_empty_collection" | "test_example_source") => {
                Some(Translatability::NONE)
            }
            (PluginKind::Source, "test_translatable") => Some(Translatability::paths(&["my_string"])),
            (PluginKind::Source, "test_sized") => {
                Some(Translatability::paths(&["label"]).with_size())
            }
            (PluginKind::Display, "test_configurable_title" | "bar" | "title") => {
                Some(Translatability::NONE)
            }
            (PluginKind::NoResultsBehaviour, "text_message") => {
                Some(Translatability::paths(&["text"]))
            }
            (PluginKind::MoreLink, "custom_link") => {
                Some(Translatability::paths(&["target", "title_override"]))
            }
            _ => None,
        }
    }
}

pub fn en() -> Langcode {
    Langcode::parse("en").unwrap()
}

pub fn fr() -> Langcode {
    Langcode::parse("fr").unwrap()
}

pub fn map(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

pub fn slot(plugin: &str, configuration: Value) -> Option<PluginSlot> {
    Some(PluginSlot::new(plugin, map(configuration)))
}

pub fn new_list() -> LinkList {
    let mut list = LinkList::new("dynamic", en(), "Link list 1");
    list.set_title(&en(), Some("My link list".to_string())).unwrap();
    list
}

/// The configuration used throughout the translation tests.
pub fn standard_configuration() -> LinkListConfiguration {
    LinkListConfiguration {
        source: slot("test_empty_collection", json!({"url": "http://google.com"})),
        display: slot("test_configurable_title", json!({"link": false})),
        no_results_behaviour: slot("text_message", json!({"text": "the no results text"})),
        more_link: slot(
            "custom_link",
            json!({
                "target": {"type": "custom", "url": "http://example.com/more-link"},
                "title_override": "test",
            }),
        ),
        size: 0,
    }
}

/// Appends " FR" to every string (except `type` keys) and flips booleans,
/// leaving plugin ids untouched so the plugin selection stays the same.
pub fn translate(configuration: &LinkListConfiguration) -> LinkListConfiguration {
    let mut out = configuration.clone();
    for kind in PluginKind::ALL {
        if let Some(slot) = out.slot_mut(kind) {
            for (key, value) in slot.plugin_configuration.iter_mut() {
                translate_value(key, value);
            }
        }
    }
    out
}

fn translate_value(key: &str, value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (k, v) in map.iter_mut() {
                translate_value(k, v);
            }
        }
        Value::Bool(b) => *b = !*b,
        Value::String(s) if key != "type" => s.push_str(" FR"),
        _ => {}
    }
}
