//! Plugin registry: string id → definition + factory, one manager per kind.
//!
//! Discovery is not handled here. Plugins are registered explicitly, either
//! one by one or through [`PluginRegistry::with_builtin_plugins`].

use crate::builtin;
use crate::error::{PluginError, PluginResult};
use crate::traits::{LinkDisplay, LinkSource, MoreLink, NoResultsBehaviour};
use linklists_model::{PluginKind, Translatability, TranslatableLookup};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

type Factory<P> = Arc<dyn Fn(Map<String, Value>) -> Box<P> + Send + Sync>;

/// Static description of a plugin plus the factory creating instances.
pub struct PluginDefinition<P: ?Sized> {
    pub id: String,
    pub label: String,
    pub description: String,
    /// Link list bundles the plugin applies to; empty means all bundles.
    pub bundles: Vec<String>,
    pub translatable: Translatability,
    factory: Factory<P>,
}

impl<P: ?Sized> PluginDefinition<P> {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        factory: impl Fn(Map<String, Value>) -> Box<P> + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: String::new(),
            bundles: Vec::new(),
            translatable: Translatability::NONE,
            factory: Arc::new(factory),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn bundles<I, S>(mut self, bundles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bundles = bundles.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn translatable(mut self, translatable: Translatability) -> Self {
        self.translatable = translatable;
        self
    }

    #[must_use]
    pub fn applies_to(&self, bundle: &str) -> bool {
        self.bundles.is_empty() || self.bundles.iter().any(|b| b == bundle)
    }
}

impl<P: ?Sized> Clone for PluginDefinition<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            description: self.description.clone(),
            bundles: self.bundles.clone(),
            translatable: self.translatable,
            factory: Arc::clone(&self.factory),
        }
    }
}

impl<P: ?Sized> std::fmt::Debug for PluginDefinition<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginDefinition")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("bundles", &self.bundles)
            .field("translatable", &self.translatable)
            .finish_non_exhaustive()
    }
}

/// Definitions of one plugin kind.
pub struct PluginManager<P: ?Sized> {
    kind: PluginKind,
    definitions: BTreeMap<String, PluginDefinition<P>>,
}

impl<P: ?Sized> PluginManager<P> {
    #[must_use]
    pub fn new(kind: PluginKind) -> Self {
        Self {
            kind,
            definitions: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> PluginKind {
        self.kind
    }

    pub fn register(&mut self, definition: PluginDefinition<P>) -> PluginResult<()> {
        if self.definitions.contains_key(&definition.id) {
            return Err(PluginError::PluginAlreadyRegistered {
                kind: self.kind,
                id: definition.id,
            });
        }
        debug!(kind = %self.kind, plugin_id = %definition.id, "Plugin registered");
        self.definitions.insert(definition.id.clone(), definition);
        Ok(())
    }

    pub fn definition(&self, id: &str) -> PluginResult<&PluginDefinition<P>> {
        self.definitions
            .get(id)
            .ok_or_else(|| PluginError::PluginNotFound {
                kind: self.kind,
                id: id.to_string(),
            })
    }

    #[must_use]
    pub fn has_definition(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    /// All definitions, ordered by id.
    pub fn definitions(&self) -> impl Iterator<Item = &PluginDefinition<P>> {
        self.definitions.values()
    }

    /// Definitions usable for lists of `bundle`.
    pub fn definitions_for_bundle<'a>(
        &'a self,
        bundle: &'a str,
    ) -> impl Iterator<Item = &'a PluginDefinition<P>> + 'a {
        self.definitions.values().filter(move |d| d.applies_to(bundle))
    }

    /// Instantiates plugin `id` configured with `configuration`.
    pub fn create_instance(
        &self,
        id: &str,
        configuration: Map<String, Value>,
    ) -> PluginResult<Box<P>> {
        let definition = self.definition(id)?;
        Ok((definition.factory)(configuration))
    }
}

/// The four plugin managers.
pub struct PluginRegistry {
    sources: PluginManager<dyn LinkSource>,
    displays: PluginManager<dyn LinkDisplay>,
    no_results_behaviours: PluginManager<dyn NoResultsBehaviour>,
    more_links: PluginManager<dyn MoreLink>,
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sources: PluginManager::new(PluginKind::Source),
            displays: PluginManager::new(PluginKind::Display),
            no_results_behaviours: PluginManager::new(PluginKind::NoResultsBehaviour),
            more_links: PluginManager::new(PluginKind::MoreLink),
        }
    }

    /// A registry holding every plugin shipped with this crate.
    pub fn with_builtin_plugins() -> PluginResult<Self> {
        let mut registry = Self::new();
        builtin::register_all(&mut registry)?;
        info!(
            sources = registry.sources.definitions.len(),
            displays = registry.displays.definitions.len(),
            no_results_behaviours = registry.no_results_behaviours.definitions.len(),
            more_links = registry.more_links.definitions.len(),
            "Built-in link list plugins registered"
        );
        Ok(registry)
    }

    // ================================================================
    // Per-kind managers
    // ================================================================

    #[must_use]
    pub fn sources(&self) -> &PluginManager<dyn LinkSource> {
        &self.sources
    }

    pub fn sources_mut(&mut self) -> &mut PluginManager<dyn LinkSource> {
        &mut self.sources
    }

    #[must_use]
    pub fn displays(&self) -> &PluginManager<dyn LinkDisplay> {
        &self.displays
    }

    pub fn displays_mut(&mut self) -> &mut PluginManager<dyn LinkDisplay> {
        &mut self.displays
    }

    #[must_use]
    pub fn no_results_behaviours(&self) -> &PluginManager<dyn NoResultsBehaviour> {
        &self.no_results_behaviours
    }

    pub fn no_results_behaviours_mut(&mut self) -> &mut PluginManager<dyn NoResultsBehaviour> {
        &mut self.no_results_behaviours
    }

    #[must_use]
    pub fn more_links(&self) -> &PluginManager<dyn MoreLink> {
        &self.more_links
    }

    pub fn more_links_mut(&mut self) -> &mut PluginManager<dyn MoreLink> {
        &mut self.more_links
    }

    // ================================================================
    // Kind-agnostic lookup
    // ================================================================

    /// Whether plugin `id` of `kind` is registered.
    #[must_use]
    pub fn contains(&self, kind: PluginKind, id: &str) -> bool {
        match kind {
            PluginKind::Source => self.sources.has_definition(id),
            PluginKind::Display => self.displays.has_definition(id),
            PluginKind::NoResultsBehaviour => self.no_results_behaviours.has_definition(id),
            PluginKind::MoreLink => self.more_links.has_definition(id),
        }
    }

    /// Label and translatability of plugin `id` of `kind`.
    pub fn lookup(&self, kind: PluginKind, id: &str) -> PluginResult<(String, Translatability)> {
        let (label, translatable) = match kind {
            PluginKind::Source => {
                let d = self.sources.definition(id)?;
                (d.label.clone(), d.translatable)
            }
            PluginKind::Display => {
                let d = self.displays.definition(id)?;
                (d.label.clone(), d.translatable)
            }
            PluginKind::NoResultsBehaviour => {
                let d = self.no_results_behaviours.definition(id)?;
                (d.label.clone(), d.translatable)
            }
            PluginKind::MoreLink => {
                let d = self.more_links.definition(id)?;
                (d.label.clone(), d.translatable)
            }
        };
        Ok((label, translatable))
    }
}

impl TranslatableLookup for PluginRegistry {
    fn translatability(&self, kind: PluginKind, plugin_id: &str) -> Option<Translatability> {
        self.lookup(kind, plugin_id).ok().map(|(_, t)| t)
    }
}
