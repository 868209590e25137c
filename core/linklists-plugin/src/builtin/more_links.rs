//! More-link plugins. Both return `None` when they have nowhere to point.

use crate::registry::PluginDefinition;
use crate::traits::{ConfigurablePlugin, MoreLink, MoreLinkContext, with_defaults};
use linklists_model::Translatability;
use linklists_types::Link;
use serde_json::{Map, Value, json};

const DEFAULT_TITLE: &str = "See all";

fn title_override(configuration: &Map<String, Value>) -> Option<&str> {
    configuration
        .get("title_override")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Links to a fixed, configured URL.
pub struct CustomLink {
    configuration: Map<String, Value>,
}

impl CustomLink {
    pub const ID: &'static str = "custom_link";

    #[must_use]
    pub fn new(configuration: Map<String, Value>) -> Self {
        let mut plugin = Self {
            configuration: Map::new(),
        };
        plugin.set_configuration(configuration);
        plugin
    }

    #[must_use]
    pub fn definition() -> PluginDefinition<dyn MoreLink> {
        PluginDefinition::new(Self::ID, "Custom link", |configuration| -> Box<dyn MoreLink> {
            Box::new(Self::new(configuration))
        })
        .description("Points the more-link at a configured URL.")
        .translatable(Translatability::paths(&["target", "title_override"]))
    }

    fn target_url(&self) -> Option<&str> {
        self.configuration
            .get("target")
            .and_then(|target| target.get("url"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

impl ConfigurablePlugin for CustomLink {
    fn id(&self) -> &str {
        Self::ID
    }

    fn label(&self) -> &str {
        "Custom link"
    }

    fn default_configuration(&self) -> Map<String, Value> {
        let mut defaults = Map::new();
        defaults.insert("target".to_string(), json!({"type": "custom", "url": ""}));
        defaults.insert("title_override".to_string(), Value::Null);
        defaults
    }

    fn configuration(&self) -> &Map<String, Value> {
        &self.configuration
    }

    fn set_configuration(&mut self, configuration: Map<String, Value>) {
        self.configuration = with_defaults(configuration, self.default_configuration());
    }
}

impl MoreLink for CustomLink {
    fn build(&self, _context: &MoreLinkContext<'_>) -> Option<Link> {
        let url = self.target_url()?;
        let title = title_override(&self.configuration).unwrap_or(DEFAULT_TITLE);
        Some(Link::new(url).with_title(title))
    }
}

/// Links to the overview page of the active source.
pub struct SourceOverviewLink {
    configuration: Map<String, Value>,
}

impl SourceOverviewLink {
    pub const ID: &'static str = "source_overview";

    #[must_use]
    pub fn new(configuration: Map<String, Value>) -> Self {
        Self { configuration }
    }

    #[must_use]
    pub fn definition() -> PluginDefinition<dyn MoreLink> {
        PluginDefinition::new(
            Self::ID,
            "Source overview",
            |configuration| -> Box<dyn MoreLink> { Box::new(Self::new(configuration)) },
        )
        .description("Points the more-link at the overview page of the source.")
        .translatable(Translatability::paths(&["title_override"]))
    }
}

impl ConfigurablePlugin for SourceOverviewLink {
    fn id(&self) -> &str {
        Self::ID
    }

    fn label(&self) -> &str {
        "Source overview"
    }

    fn configuration(&self) -> &Map<String, Value> {
        &self.configuration
    }

    fn set_configuration(&mut self, configuration: Map<String, Value>) {
        self.configuration = configuration;
    }
}

impl MoreLink for SourceOverviewLink {
    fn build(&self, context: &MoreLinkContext<'_>) -> Option<Link> {
        let url = context.source.overview_url()?;
        let title = title_override(&self.configuration).unwrap_or(DEFAULT_TITLE);
        Some(Link::new(url).with_title(title))
    }
}
