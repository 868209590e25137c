use serde::{Deserialize, Serialize};

/// A link list bundle definition.
///
/// Read-only input when creating lists: it decides which source plugin is
/// applied automatically and whether editors may pick another one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkListType {
    pub id: String,
    #[serde(default)]
    pub label: String,
    /// Source plugin applied on save when a list has no source yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_link_source: Option<String>,
    #[serde(default = "default_configurable")]
    pub configurable_link_source_plugins: bool,
}

fn default_configurable() -> bool {
    true
}

impl LinkListType {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            default_link_source: None,
            configurable_link_source_plugins: true,
        }
    }

    /// A bundle whose lists always use `source` and can not switch away.
    #[must_use]
    pub fn with_fixed_source(mut self, source: impl Into<String>) -> Self {
        self.default_link_source = Some(source.into());
        self.configurable_link_source_plugins = false;
        self
    }

    /// Whether `plugin_id` may be selected as source for lists of this type.
    #[must_use]
    pub fn allows_source(&self, plugin_id: &str) -> bool {
        self.configurable_link_source_plugins
            || self.default_link_source.as_deref() == Some(plugin_id)
    }
}
