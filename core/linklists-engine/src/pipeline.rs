//! Turns a link list into rendered output.

use crate::error::{EngineError, EngineResult};
use linklists_model::{LinkList, LinkListConfiguration, PluginKind, PluginSlot};
use linklists_plugin::{
    LinkDisplay, LinkSource, MoreLink, MoreLinkContext, NoResultsBehaviour, PluginRegistry,
    RenderedOutput,
};
use linklists_types::{CacheMetadata, Langcode, LinkCollection};
use tracing::debug;

/// Cache tag every rendered list carries.
#[must_use]
pub fn link_list_cache_tag(list: &LinkList) -> String {
    format!("link_list:{}", list.id())
}

/// Runs the resolution pipeline against a plugin registry.
pub struct LinkListRenderer<'a> {
    registry: &'a PluginRegistry,
}

impl<'a> LinkListRenderer<'a> {
    #[must_use]
    pub fn new(registry: &'a PluginRegistry) -> Self {
        Self { registry }
    }

    /// Resolves the links of `list` in `langcode`, truncated to its size.
    pub fn resolve_links(
        &self,
        list: &LinkList,
        langcode: &Langcode,
    ) -> EngineResult<LinkCollection> {
        let configuration = list.configuration(langcode)?;
        let source = self.source(&configuration)?;
        Self::resolve_with(source.as_ref(), &configuration)
    }

    /// Renders `list` in `langcode`.
    ///
    /// An empty result falls back to the no-results behaviour when one is
    /// configured. A configured more-link is appended in every case.
    pub fn render(&self, list: &LinkList, langcode: &Langcode) -> EngineResult<RenderedOutput> {
        let configuration = list.configuration(langcode)?;
        let source = self.source(&configuration)?;
        let links = Self::resolve_with(source.as_ref(), &configuration)?;

        let no_results = selected(configuration.no_results_behaviour.as_ref());
        let mut output = match (no_results, links.is_empty()) {
            (Some((plugin_id, slot)), true) => {
                debug!(
                    link_list_id = %list.id(),
                    plugin_id,
                    "No links resolved, rendering no-results behaviour"
                );
                self.registry
                    .no_results_behaviours()
                    .create_instance(plugin_id, slot.plugin_configuration.clone())?
                    .render()
            }
            _ => {
                let slot = configuration
                    .display
                    .as_ref()
                    .ok_or(EngineError::MissingPlugin(PluginKind::Display))?;
                let plugin_id = required(slot, PluginKind::Display)?;
                self.registry
                    .displays()
                    .create_instance(plugin_id, slot.plugin_configuration.clone())?
                    .render(&links)
            }
        };

        if let Some((plugin_id, slot)) = selected(configuration.more_link.as_ref()) {
            let plugin = self
                .registry
                .more_links()
                .create_instance(plugin_id, slot.plugin_configuration.clone())?;
            let context = MoreLinkContext {
                source: source.as_ref(),
                links: &links,
            };
            if let Some(more) = plugin.build(&context) {
                output.push_more_link(&more);
            }
        }

        if output.title.is_none() {
            output.title = list.title(langcode)?.map(str::to_string);
        }
        output.cache.merge(&links.cache_metadata());
        output
            .cache
            .merge(&CacheMetadata::new().with_tags([link_list_cache_tag(list)]));
        Ok(output)
    }

    fn source(&self, configuration: &LinkListConfiguration) -> EngineResult<Box<dyn LinkSource>> {
        let slot = configuration
            .source
            .as_ref()
            .ok_or(EngineError::MissingPlugin(PluginKind::Source))?;
        let plugin_id = required(slot, PluginKind::Source)?;
        Ok(self
            .registry
            .sources()
            .create_instance(plugin_id, slot.plugin_configuration.clone())?)
    }

    fn resolve_with(
        source: &dyn LinkSource,
        configuration: &LinkListConfiguration,
    ) -> EngineResult<LinkCollection> {
        let limit = configuration.limit();
        let mut links = source.resolve(limit)?;
        if let Some(limit) = limit {
            links.truncate(limit);
        }
        Ok(links)
    }
}

/// An optional slot counts as configured only when it names a plugin.
fn selected(slot: Option<&PluginSlot>) -> Option<(&str, &PluginSlot)> {
    slot.and_then(|slot| slot.plugin_id().map(|id| (id, slot)))
}

fn required(slot: &PluginSlot, kind: PluginKind) -> EngineResult<&str> {
    slot.plugin_id().ok_or(EngineError::MissingPlugin(kind))
}
