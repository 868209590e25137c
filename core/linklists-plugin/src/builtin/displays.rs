use crate::registry::PluginDefinition;
use crate::render::{RenderElement, RenderedOutput};
use crate::traits::{ConfigurablePlugin, LinkDisplay, with_defaults};
use linklists_types::{Link, LinkCollection};
use serde_json::{Map, Value};

fn linked_element(link: &Link, teaser: Option<String>) -> RenderElement {
    RenderElement::Link {
        url: link.url.clone(),
        title: link.label().to_string(),
        teaser,
    }
}

/// Titles only, optionally linked.
pub struct TitleDisplay {
    configuration: Map<String, Value>,
}

impl TitleDisplay {
    pub const ID: &'static str = "title";

    #[must_use]
    pub fn new(configuration: Map<String, Value>) -> Self {
        let mut plugin = Self {
            configuration: Map::new(),
        };
        plugin.set_configuration(configuration);
        plugin
    }

    #[must_use]
    pub fn definition() -> PluginDefinition<dyn LinkDisplay> {
        PluginDefinition::new(Self::ID, "Titles", |configuration| -> Box<dyn LinkDisplay> {
            Box::new(Self::new(configuration))
        })
        .description("Renders the title of every link.")
    }

    fn linked(&self) -> bool {
        self.configuration
            .get("link")
            .and_then(Value::as_bool)
            .unwrap_or(true)
    }
}

impl ConfigurablePlugin for TitleDisplay {
    fn id(&self) -> &str {
        Self::ID
    }

    fn label(&self) -> &str {
        "Titles"
    }

    fn default_configuration(&self) -> Map<String, Value> {
        let mut defaults = Map::new();
        defaults.insert("link".to_string(), Value::Bool(true));
        defaults
    }

    fn configuration(&self) -> &Map<String, Value> {
        &self.configuration
    }

    fn set_configuration(&mut self, configuration: Map<String, Value>) {
        self.configuration = with_defaults(configuration, self.default_configuration());
    }
}

impl LinkDisplay for TitleDisplay {
    fn render(&self, links: &LinkCollection) -> RenderedOutput {
        let linked = self.linked();
        let mut output = RenderedOutput::new().with_cache(links.cache_metadata());
        for link in links {
            if linked {
                output.push(linked_element(link, None));
            } else {
                output.push(RenderElement::Text {
                    text: link.label().to_string(),
                });
            }
        }
        output
    }
}

/// Linked titles followed by the teaser text, when a link carries one.
pub struct TeaserDisplay {
    configuration: Map<String, Value>,
}

impl TeaserDisplay {
    pub const ID: &'static str = "teaser";

    #[must_use]
    pub fn new(configuration: Map<String, Value>) -> Self {
        Self { configuration }
    }

    #[must_use]
    pub fn definition() -> PluginDefinition<dyn LinkDisplay> {
        PluginDefinition::new(Self::ID, "Teasers", |configuration| -> Box<dyn LinkDisplay> {
            Box::new(Self::new(configuration))
        })
        .description("Renders linked titles with their teaser.")
    }
}

impl ConfigurablePlugin for TeaserDisplay {
    fn id(&self) -> &str {
        Self::ID
    }

    fn label(&self) -> &str {
        "Teasers"
    }

    fn configuration(&self) -> &Map<String, Value> {
        &self.configuration
    }

    fn set_configuration(&mut self, configuration: Map<String, Value>) {
        self.configuration = configuration;
    }
}

impl LinkDisplay for TeaserDisplay {
    fn render(&self, links: &LinkCollection) -> RenderedOutput {
        let mut output = RenderedOutput::new().with_cache(links.cache_metadata());
        for link in links {
            let teaser = link.metadata_str("teaser").map(str::to_string);
            output.push(linked_element(link, teaser));
        }
        output
    }
}
