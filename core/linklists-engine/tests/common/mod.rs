//! Shared fixtures for engine tests.

#![allow(dead_code)]

use linklists_model::{LinkList, Translatability};
use linklists_plugin::{
    ConfigurablePlugin, LinkSource, PluginDefinition, PluginRegistry, PluginResult,
};
use linklists_types::{CacheMetadata, Langcode, Link, LinkCollection, MaxAge};
use serde_json::{Map, Value, json};

pub fn en() -> Langcode {
    Langcode::parse("en").unwrap()
}

pub fn fr() -> Langcode {
    Langcode::parse("fr").unwrap()
}

pub fn map(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

/// Source producing `count` numbered links, each cached for an hour.
pub struct NumberedSource {
    configuration: Map<String, Value>,
}

impl NumberedSource {
    pub const ID: &'static str = "test_numbered";

    fn count(&self) -> usize {
        self.configuration
            .get("count")
            .and_then(Value::as_u64)
            .unwrap_or(0) as usize
    }
}

impl ConfigurablePlugin for NumberedSource {
    fn id(&self) -> &str {
        Self::ID
    }

    fn label(&self) -> &str {
        "Numbered"
    }

    fn configuration(&self) -> &Map<String, Value> {
        &self.configuration
    }

    fn set_configuration(&mut self, configuration: Map<String, Value>) {
        self.configuration = configuration;
    }
}

impl LinkSource for NumberedSource {
    fn resolve(&self, _limit: Option<usize>) -> PluginResult<LinkCollection> {
        let mut links: LinkCollection = (1..=self.count())
            .map(|n| {
                Link::new(format!("http://example.com/{n}"))
                    .with_title(format!("Link {n}"))
                    .with_cache(
                        CacheMetadata::new()
                            .with_tags([format!("item:{n}")])
                            .with_max_age(MaxAge::Seconds(3600)),
                    )
            })
            .collect();
        links.own_cache_mut().add_tags(["test_numbered"]);
        Ok(links)
    }

    fn overview_url(&self) -> Option<String> {
        Some("http://example.com/all".to_string())
    }
}

/// Built-in plugins plus [`NumberedSource`].
pub fn registry() -> PluginRegistry {
    let mut registry = PluginRegistry::with_builtin_plugins().unwrap();
    registry
        .sources_mut()
        .register(
            PluginDefinition::new(NumberedSource::ID, "Numbered", |configuration| -> Box<dyn LinkSource> {
                Box::new(NumberedSource { configuration })
            })
            .translatable(Translatability::NONE.with_size()),
        )
        .unwrap();
    registry
}

/// A list of the `dynamic` bundle with the given base configuration.
pub fn list_with(registry: &PluginRegistry, configuration: Value) -> LinkList {
    let mut list = LinkList::new("dynamic", en(), "Test list");
    list.set_title(&en(), Some("Test title".to_string())).unwrap();
    list.set_configuration_value(&en(), configuration, registry)
        .unwrap();
    list
}

pub fn numbered(count: u64, size: u32) -> Value {
    json!({
        "source": {"plugin": NumberedSource::ID, "plugin_configuration": {"count": count}},
        "display": {"plugin": "title"},
        "size": size,
    })
}
