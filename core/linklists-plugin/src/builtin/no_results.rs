use crate::registry::PluginDefinition;
use crate::render::{RenderElement, RenderedOutput};
use crate::traits::{ConfigurablePlugin, NoResultsBehaviour, with_defaults};
use linklists_model::Translatability;
use serde_json::{Map, Value};

/// Shows a configurable message when the source returned nothing.
pub struct TextMessage {
    configuration: Map<String, Value>,
}

impl TextMessage {
    pub const ID: &'static str = "text_message";

    #[must_use]
    pub fn new(configuration: Map<String, Value>) -> Self {
        let mut plugin = Self {
            configuration: Map::new(),
        };
        plugin.set_configuration(configuration);
        plugin
    }

    #[must_use]
    pub fn definition() -> PluginDefinition<dyn NoResultsBehaviour> {
        PluginDefinition::new(
            Self::ID,
            "Text message",
            |configuration| -> Box<dyn NoResultsBehaviour> { Box::new(Self::new(configuration)) },
        )
        .description("Shows a message instead of the empty list.")
        .translatable(Translatability::paths(&["text"]))
    }

    #[must_use]
    pub fn text(&self) -> &str {
        self.configuration
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

impl ConfigurablePlugin for TextMessage {
    fn id(&self) -> &str {
        Self::ID
    }

    fn label(&self) -> &str {
        "Text message"
    }

    fn default_configuration(&self) -> Map<String, Value> {
        let mut defaults = Map::new();
        defaults.insert("text".to_string(), Value::String(String::new()));
        defaults
    }

    fn configuration(&self) -> &Map<String, Value> {
        &self.configuration
    }

    fn set_configuration(&mut self, configuration: Map<String, Value>) {
        self.configuration = with_defaults(configuration, self.default_configuration());
    }
}

impl NoResultsBehaviour for TextMessage {
    fn render(&self) -> RenderedOutput {
        let mut output = RenderedOutput::new();
        let text = self.text().trim();
        if !text.is_empty() {
            output.push(RenderElement::Message {
                text: text.to_string(),
            });
        }
        output
    }
}

/// Renders nothing at all.
pub struct HideList {
    configuration: Map<String, Value>,
}

impl HideList {
    pub const ID: &'static str = "hide_list";

    #[must_use]
    pub fn definition() -> PluginDefinition<dyn NoResultsBehaviour> {
        PluginDefinition::new(
            Self::ID,
            "Hide",
            |configuration| -> Box<dyn NoResultsBehaviour> { Box::new(Self { configuration }) },
        )
        .description("Hides the list when it has no links.")
    }
}

impl ConfigurablePlugin for HideList {
    fn id(&self) -> &str {
        Self::ID
    }

    fn label(&self) -> &str {
        "Hide"
    }

    fn configuration(&self) -> &Map<String, Value> {
        &self.configuration
    }

    fn set_configuration(&mut self, configuration: Map<String, Value>) {
        self.configuration = configuration;
    }
}

impl NoResultsBehaviour for HideList {
    fn render(&self) -> RenderedOutput {
        RenderedOutput::new()
    }
}
