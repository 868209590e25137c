//! The pluggable configuration structure of a link list.
//!
//! The public contract is the nested map shape:
//!
//! ```text
//! {
//!   source:               { plugin, plugin_configuration },
//!   display:              { plugin, plugin_configuration },
//!   no_results_behaviour: { plugin, plugin_configuration },   (optional)
//!   more_link:            { plugin, plugin_configuration },   (optional)
//!   size:                 integer, 0 = unlimited
//! }
//! ```
//!
//! [`LinkListConfiguration`] is the full value stored on the base
//! translation. [`ConfigurationOverride`] is the sparse tree stored on every
//! other translation: it mirrors the full shape but carries no plugin ids.

use crate::error::{ConfigurationError, ConfigurationResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The four plugin slots of a link list configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PluginKind {
    Source,
    Display,
    NoResultsBehaviour,
    MoreLink,
}

impl PluginKind {
    pub const ALL: [PluginKind; 4] = [
        PluginKind::Source,
        PluginKind::Display,
        PluginKind::NoResultsBehaviour,
        PluginKind::MoreLink,
    ];

    /// Key of the slot in the configuration map.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            PluginKind::Source => "source",
            PluginKind::Display => "display",
            PluginKind::NoResultsBehaviour => "no_results_behaviour",
            PluginKind::MoreLink => "more_link",
        }
    }
}

impl fmt::Display for PluginKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One plugin slot: which plugin is selected and its configuration.
///
/// An empty slot (`{}`) deserializes to `plugin: None` and an empty map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginSlot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
    #[serde(default)]
    pub plugin_configuration: Map<String, Value>,
}

impl PluginSlot {
    #[must_use]
    pub fn new(plugin: impl Into<String>, plugin_configuration: Map<String, Value>) -> Self {
        Self {
            plugin: Some(plugin.into()),
            plugin_configuration,
        }
    }

    /// The selected plugin id. A blank id counts as no selection.
    #[must_use]
    pub fn plugin_id(&self) -> Option<&str> {
        self.plugin.as_deref().filter(|id| !id.trim().is_empty())
    }
}

/// The full configuration value, as submitted by editors and stored on the
/// base translation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinkListConfiguration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PluginSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<PluginSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_results_behaviour: Option<PluginSlot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_link: Option<PluginSlot>,
    /// Maximum number of links to show; 0 means unlimited.
    #[serde(default)]
    pub size: u32,
}

impl LinkListConfiguration {
    /// Parses the public map shape, rejecting anything malformed.
    pub fn from_value(value: Value) -> ConfigurationResult<Self> {
        if !value.is_object() {
            return Err(ConfigurationError::Shape(
                "configuration must be a map".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| ConfigurationError::Shape(e.to_string()))
    }

    /// Renders the configuration back into the public map shape.
    pub fn to_value(&self) -> ConfigurationResult<Value> {
        serde_json::to_value(self).map_err(|e| ConfigurationError::Shape(e.to_string()))
    }

    #[must_use]
    pub fn slot(&self, kind: PluginKind) -> Option<&PluginSlot> {
        match kind {
            PluginKind::Source => self.source.as_ref(),
            PluginKind::Display => self.display.as_ref(),
            PluginKind::NoResultsBehaviour => self.no_results_behaviour.as_ref(),
            PluginKind::MoreLink => self.more_link.as_ref(),
        }
    }

    pub fn slot_mut(&mut self, kind: PluginKind) -> Option<&mut PluginSlot> {
        match kind {
            PluginKind::Source => self.source.as_mut(),
            PluginKind::Display => self.display.as_mut(),
            PluginKind::NoResultsBehaviour => self.no_results_behaviour.as_mut(),
            PluginKind::MoreLink => self.more_link.as_mut(),
        }
    }

    pub fn set_slot(&mut self, kind: PluginKind, slot: Option<PluginSlot>) {
        match kind {
            PluginKind::Source => self.source = slot,
            PluginKind::Display => self.display = slot,
            PluginKind::NoResultsBehaviour => self.no_results_behaviour = slot,
            PluginKind::MoreLink => self.more_link = slot,
        }
    }

    /// Plugin id selected for `kind`, if any.
    #[must_use]
    pub fn plugin_id(&self, kind: PluginKind) -> Option<&str> {
        self.slot(kind).and_then(PluginSlot::plugin_id)
    }

    /// Size as a truncation limit; `None` means unlimited.
    #[must_use]
    pub fn limit(&self) -> Option<usize> {
        (self.size > 0).then_some(self.size as usize)
    }
}

/// Sparse per-translation values of one slot. Never carries a plugin id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlotOverride {
    #[serde(default)]
    pub plugin_configuration: Map<String, Value>,
}

/// Sparse configuration stored on a non-base translation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigurationOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<SlotOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<SlotOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_results_behaviour: Option<SlotOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub more_link: Option<SlotOverride>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl ConfigurationOverride {
    #[must_use]
    pub fn slot(&self, kind: PluginKind) -> Option<&SlotOverride> {
        match kind {
            PluginKind::Source => self.source.as_ref(),
            PluginKind::Display => self.display.as_ref(),
            PluginKind::NoResultsBehaviour => self.no_results_behaviour.as_ref(),
            PluginKind::MoreLink => self.more_link.as_ref(),
        }
    }

    pub fn set_slot(&mut self, kind: PluginKind, slot: Option<SlotOverride>) {
        match kind {
            PluginKind::Source => self.source = slot,
            PluginKind::Display => self.display = slot,
            PluginKind::NoResultsBehaviour => self.no_results_behaviour = slot,
            PluginKind::MoreLink => self.more_link = slot,
        }
    }

    /// True when nothing is overridden and the translation falls back fully
    /// to the base configuration.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        PluginKind::ALL.iter().all(|kind| self.slot(*kind).is_none()) && self.size.is_none()
    }
}

/// Recursively merges `overrides` into `base`.
///
/// Where both sides hold a map the merge recurses; otherwise the override
/// value replaces the base value.
pub fn deep_merge(base: &mut Map<String, Value>, overrides: &Map<String, Value>) {
    for (key, value) in overrides {
        match (base.get_mut(key), value) {
            (Some(Value::Object(base_child)), Value::Object(override_child)) => {
                deep_merge(base_child, override_child);
            }
            _ => {
                base.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Copies the values found at `paths` out of `configuration`, keeping their
/// nesting. Paths use `/` to descend into nested maps (`"target/url"`).
/// Missing paths are skipped.
#[must_use]
pub fn extract_paths(configuration: &Map<String, Value>, paths: &[&str]) -> Map<String, Value> {
    let mut out = Map::new();
    for path in paths {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if let Some(value) = lookup(configuration, &segments) {
            insert_at(&mut out, &segments, value.clone());
        }
    }
    out
}

fn lookup<'a>(map: &'a Map<String, Value>, segments: &[&str]) -> Option<&'a Value> {
    let (first, rest) = segments.split_first()?;
    let value = map.get(*first)?;
    if rest.is_empty() {
        return Some(value);
    }
    lookup(value.as_object()?, rest)
}

fn insert_at(map: &mut Map<String, Value>, segments: &[&str], value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };
    if rest.is_empty() {
        map.insert((*first).to_string(), value);
        return;
    }
    let child = map
        .entry((*first).to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !child.is_object() {
        *child = Value::Object(Map::new());
    }
    if let Value::Object(child) = child {
        insert_at(child, rest, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn deep_merge_recurses_into_maps_and_replaces_leaves() {
        let mut base = map(json!({"target": {"type": "custom", "url": "/a"}, "title": "x", "n": 1}));
        deep_merge(&mut base, &map(json!({"target": {"url": "/b"}, "n": {"nested": true}})));
        assert_eq!(
            Value::Object(base),
            json!({"target": {"type": "custom", "url": "/b"}, "title": "x", "n": {"nested": true}})
        );
    }

    #[test]
    fn extract_paths_keeps_nesting_and_skips_missing() {
        let config = map(json!({"target": {"type": "custom", "url": "/a"}, "title_override": "t", "other": 1}));
        let out = extract_paths(&config, &["target/url", "title_override", "missing", "target/url/deeper"]);
        assert_eq!(Value::Object(out), json!({"target": {"url": "/a"}, "title_override": "t"}));
    }
}
