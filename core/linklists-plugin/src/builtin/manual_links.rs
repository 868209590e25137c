//! Source returning links curated by hand in the list configuration.

use crate::error::{PluginError, PluginResult};
use crate::registry::PluginDefinition;
use crate::traits::{ConfigurablePlugin, LinkSource, with_defaults};
use linklists_model::{LinkList, Translatability};
use linklists_types::{CacheMetadata, Link, LinkCollection};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use tracing::debug;

pub const CACHE_TAG: &str = "link_list_manual_links";

/// One hand-entered link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualLink {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teaser: Option<String>,
}

pub struct ManualLinksSource {
    configuration: Map<String, Value>,
}

impl ManualLinksSource {
    pub const ID: &'static str = "manual_links";

    #[must_use]
    pub fn new(configuration: Map<String, Value>) -> Self {
        let mut plugin = Self {
            configuration: Map::new(),
        };
        plugin.set_configuration(configuration);
        plugin
    }

    #[must_use]
    pub fn definition() -> PluginDefinition<dyn LinkSource> {
        PluginDefinition::new(Self::ID, "Manual links", |configuration| -> Box<dyn LinkSource> {
            Box::new(Self::new(configuration))
        })
        .description("Links entered by editors, in the order they were entered.")
        .translatable(Translatability::paths(&["links"]))
    }

    /// The configured links.
    pub fn links(&self) -> PluginResult<Vec<ManualLink>> {
        let links = self.configuration.get("links").cloned().unwrap_or(Value::Null);
        if links.is_null() {
            return Ok(Vec::new());
        }
        serde_json::from_value(links).map_err(|e| PluginError::InvalidConfiguration {
            plugin_id: Self::ID.to_string(),
            message: e.to_string(),
        })
    }
}

impl ConfigurablePlugin for ManualLinksSource {
    fn id(&self) -> &str {
        Self::ID
    }

    fn label(&self) -> &str {
        "Manual links"
    }

    fn default_configuration(&self) -> Map<String, Value> {
        let mut defaults = Map::new();
        defaults.insert("links".to_string(), json!([]));
        defaults
    }

    fn configuration(&self) -> &Map<String, Value> {
        &self.configuration
    }

    fn set_configuration(&mut self, configuration: Map<String, Value>) {
        self.configuration = with_defaults(configuration, self.default_configuration());
    }
}

impl LinkSource for ManualLinksSource {
    fn resolve(&self, limit: Option<usize>) -> PluginResult<LinkCollection> {
        let links = self.links()?;
        let mut collection: LinkCollection = links
            .into_iter()
            .take(limit.unwrap_or(usize::MAX))
            .map(|manual| {
                let mut link = Link::new(manual.url);
                link.title = manual.title;
                if let Some(teaser) = manual.teaser {
                    link = link.with_metadata("teaser", Value::String(teaser));
                }
                link
            })
            .collect();
        collection.own_cache_mut().merge(&CacheMetadata::new().with_tags([CACHE_TAG]));
        Ok(collection)
    }

    /// Trims every value and drops links without a URL.
    fn pre_save(&mut self, list: &LinkList) -> PluginResult<()> {
        let before = self.links()?;
        let count = before.len();
        let cleaned: Vec<ManualLink> = before
            .into_iter()
            .filter_map(|link| {
                let url = link.url.trim().to_string();
                if url.is_empty() {
                    return None;
                }
                let trim = |v: Option<String>| {
                    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
                };
                Some(ManualLink {
                    url,
                    title: trim(link.title),
                    teaser: trim(link.teaser),
                })
            })
            .collect();
        if cleaned.len() != count {
            debug!(
                link_list_id = %list.id(),
                dropped = count - cleaned.len(),
                "Dropped manual links without URL"
            );
        }
        self.configuration
            .insert("links".to_string(), serde_json::to_value(cleaned)?);
        Ok(())
    }
}
