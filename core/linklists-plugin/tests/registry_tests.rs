use linklists_model::{PluginKind, Translatability, TranslatableLookup};
use linklists_plugin::{
    ConfigurablePlugin, LinkSource, PluginDefinition, PluginError, PluginManager, PluginRegistry,
    PluginResult,
};
use linklists_types::{Link, LinkCollection};
use pretty_assertions::assert_eq;
use serde_json::{Map, Value, json};

struct FixedSource {
    configuration: Map<String, Value>,
}

impl ConfigurablePlugin for FixedSource {
    fn id(&self) -> &str {
        "fixed"
    }

    fn label(&self) -> &str {
        "Fixed"
    }

    fn configuration(&self) -> &Map<String, Value> {
        &self.configuration
    }

    fn set_configuration(&mut self, configuration: Map<String, Value>) {
        self.configuration = configuration;
    }
}

impl LinkSource for FixedSource {
    fn resolve(&self, _limit: Option<usize>) -> PluginResult<LinkCollection> {
        let url = self
            .configuration
            .get("url")
            .and_then(Value::as_str)
            .unwrap_or("http://example.com");
        Ok(std::iter::once(Link::new(url)).collect())
    }
}

fn fixed_definition() -> PluginDefinition<dyn LinkSource> {
    PluginDefinition::new("fixed", "Fixed", |configuration| -> Box<dyn LinkSource> {
        Box::new(FixedSource { configuration })
    })
}

fn map(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

// ── PluginManager ────────────────────────────────────────────────

#[test]
fn register_and_create_instance() {
    let mut manager = PluginManager::new(PluginKind::Source);
    manager.register(fixed_definition()).unwrap();

    assert!(manager.has_definition("fixed"));
    let source = manager
        .create_instance("fixed", map(json!({"url": "http://a.test"})))
        .unwrap();
    assert_eq!(source.id(), "fixed");
    let links = source.resolve(None).unwrap();
    assert_eq!(links.get(0).map(|l| l.url.as_str()), Some("http://a.test"));
}

#[test]
fn duplicate_registration_is_rejected() {
    let mut manager = PluginManager::new(PluginKind::Source);
    manager.register(fixed_definition()).unwrap();
    let err = manager.register(fixed_definition()).unwrap_err();
    assert!(matches!(
        err,
        PluginError::PluginAlreadyRegistered { kind: PluginKind::Source, ref id } if id == "fixed"
    ));
}

#[test]
fn unknown_plugin_is_not_found() {
    let manager: PluginManager<dyn LinkSource> = PluginManager::new(PluginKind::Source);
    let err = manager.create_instance("missing", Map::new()).err().unwrap();
    assert!(matches!(err, PluginError::PluginNotFound { ref id, .. } if id == "missing"));
    assert_eq!(err.to_string(), "source plugin not found: missing");
}

#[test]
fn bundle_restrictions_filter_definitions() {
    let mut manager = PluginManager::new(PluginKind::Source);
    manager.register(fixed_definition()).unwrap();
    manager
        .register(
            PluginDefinition::new("restricted", "Restricted", |configuration| -> Box<dyn LinkSource> {
                Box::new(FixedSource { configuration })
            })
            .bundles(["manual"]),
        )
        .unwrap();

    let for_dynamic: Vec<&str> = manager
        .definitions_for_bundle("dynamic")
        .map(|d| d.id.as_str())
        .collect();
    let for_manual: Vec<&str> = manager
        .definitions_for_bundle("manual")
        .map(|d| d.id.as_str())
        .collect();
    assert_eq!(for_dynamic, vec!["fixed"]);
    assert_eq!(for_manual, vec!["fixed", "restricted"]);
}

// ── PluginRegistry ───────────────────────────────────────────────

#[test]
fn builtin_registry_lists_every_kind() {
    let registry = PluginRegistry::with_builtin_plugins().unwrap();

    let ids = |kind: PluginKind| -> Vec<String> {
        match kind {
            PluginKind::Source => registry.sources().definitions().map(|d| d.id.clone()).collect(),
            PluginKind::Display => registry.displays().definitions().map(|d| d.id.clone()).collect(),
            PluginKind::NoResultsBehaviour => registry
                .no_results_behaviours()
                .definitions()
                .map(|d| d.id.clone())
                .collect(),
            PluginKind::MoreLink => {
                registry.more_links().definitions().map(|d| d.id.clone()).collect()
            }
        }
    };

    assert_eq!(ids(PluginKind::Source), vec!["manual_links"]);
    assert_eq!(ids(PluginKind::Display), vec!["teaser", "title"]);
    assert_eq!(ids(PluginKind::NoResultsBehaviour), vec!["hide_list", "text_message"]);
    assert_eq!(ids(PluginKind::MoreLink), vec!["custom_link", "source_overview"]);
}

#[test]
fn registry_answers_translatability() {
    let registry = PluginRegistry::with_builtin_plugins().unwrap();

    assert_eq!(
        registry.translatability(PluginKind::NoResultsBehaviour, "text_message"),
        Some(Translatability::paths(&["text"]))
    );
    assert_eq!(
        registry.translatability(PluginKind::Display, "title"),
        Some(Translatability::NONE)
    );
    // Ids are scoped per kind.
    assert_eq!(registry.translatability(PluginKind::Display, "text_message"), None);
    assert!(registry.contains(PluginKind::Source, "manual_links"));
    assert!(!registry.contains(PluginKind::Source, "title"));
}

#[test]
fn lookup_returns_label() {
    let registry = PluginRegistry::with_builtin_plugins().unwrap();
    let (label, translatable) = registry.lookup(PluginKind::MoreLink, "custom_link").unwrap();
    assert_eq!(label, "Custom link");
    assert_eq!(translatable.paths, &["target", "title_override"]);

    let err = registry.lookup(PluginKind::MoreLink, "nope").unwrap_err();
    assert!(matches!(err, PluginError::PluginNotFound { kind: PluginKind::MoreLink, .. }));
}

#[test]
fn custom_plugins_join_builtin_ones() {
    let mut registry = PluginRegistry::with_builtin_plugins().unwrap();
    registry.sources_mut().register(fixed_definition()).unwrap();
    assert!(registry.contains(PluginKind::Source, "fixed"));
    assert_eq!(registry.sources().definitions().count(), 2);
}
