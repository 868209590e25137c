//! Structural validation of a link list before persistence.

use crate::configuration::{LinkListConfiguration, PluginKind};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NO_SOURCE_MESSAGE: &str = "There is no link source selected";
pub const NO_DISPLAY_MESSAGE: &str = "There is no link display selected";
pub const NO_ADMINISTRATIVE_TITLE_MESSAGE: &str = "The administrative title is required";

/// A single constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub property_path: String,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(property_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property_path: property_path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property_path, self.message)
    }
}

/// Checks that both a source and a display plugin are selected.
///
/// Violations are collected, not fail-fast: a configuration missing both
/// yields two.
#[must_use]
pub fn validate_configuration(configuration: &LinkListConfiguration) -> Vec<Violation> {
    let mut violations = Vec::new();
    if configuration.plugin_id(PluginKind::Source).is_none() {
        violations.push(Violation::new("configuration", NO_SOURCE_MESSAGE));
    }
    if configuration.plugin_id(PluginKind::Display).is_none() {
        violations.push(Violation::new("configuration", NO_DISPLAY_MESSAGE));
    }
    violations
}
