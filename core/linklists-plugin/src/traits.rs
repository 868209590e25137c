//! The four plugin contracts.
//!
//! Each kind is a flat trait; concrete plugins implement exactly one of
//! them and share only [`ConfigurablePlugin`].

use crate::error::PluginResult;
use crate::render::RenderedOutput;
use linklists_model::LinkList;
use linklists_types::{Link, LinkCollection};
use serde_json::{Map, Value};

/// Configuration handling shared by every plugin kind.
pub trait ConfigurablePlugin: Send + Sync {
    fn id(&self) -> &str;

    fn label(&self) -> &str;

    fn default_configuration(&self) -> Map<String, Value> {
        Map::new()
    }

    fn configuration(&self) -> &Map<String, Value>;

    /// Replaces the configuration. Implementations store the result of
    /// [`with_defaults`] so that missing keys fall back to the defaults.
    fn set_configuration(&mut self, configuration: Map<String, Value>);
}

/// Merges `defaults` under `configuration`: supplied keys win, missing keys
/// are filled from the defaults. Not recursive.
#[must_use]
pub fn with_defaults(
    mut configuration: Map<String, Value>,
    defaults: Map<String, Value>,
) -> Map<String, Value> {
    for (key, value) in defaults {
        configuration.entry(key).or_insert(value);
    }
    configuration
}

/// Produces links from some backend.
pub trait LinkSource: ConfigurablePlugin {
    /// Resolves the links. `limit` is a hint; callers truncate anyway.
    fn resolve(&self, limit: Option<usize>) -> PluginResult<LinkCollection>;

    /// Where a "see all" link for this source should point, if anywhere.
    fn overview_url(&self) -> Option<String> {
        None
    }

    /// Normalizes the plugin's own configuration before the list is saved.
    /// The caller writes [`ConfigurablePlugin::configuration`] back.
    fn pre_save(&mut self, list: &LinkList) -> PluginResult<()> {
        let _ = list;
        Ok(())
    }
}

/// Renders a collection of links.
pub trait LinkDisplay: ConfigurablePlugin {
    fn render(&self, links: &LinkCollection) -> RenderedOutput;

    fn pre_save(&mut self, list: &LinkList) -> PluginResult<()> {
        let _ = list;
        Ok(())
    }
}

/// Fallback output used instead of an empty display.
pub trait NoResultsBehaviour: ConfigurablePlugin {
    fn render(&self) -> RenderedOutput;
}

/// What a more-link plugin can look at when building its link.
pub struct MoreLinkContext<'a> {
    pub source: &'a dyn LinkSource,
    pub links: &'a LinkCollection,
}

/// Builds the trailing "see all" link.
pub trait MoreLink: ConfigurablePlugin {
    /// `None` when no link should be shown.
    fn build(&self, context: &MoreLinkContext<'_>) -> Option<Link>;
}
