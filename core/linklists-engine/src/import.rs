//! JSON documents describing a link list to create.
//!
//! ```json
//! {
//!   "bundle": "manual",
//!   "administrative_title": "Partners",
//!   "title": "Our partners",
//!   "local": false,
//!   "configuration": {"display": {"plugin": "title"}},
//!   "translations": {
//!     "fr": {"title": "Nos partenaires", "configuration": {...}}
//!   }
//! }
//! ```

use linklists_types::Langcode;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportDocument {
    pub bundle: String,
    /// Base language; the settings default when absent.
    #[serde(default)]
    pub langcode: Option<Langcode>,
    pub administrative_title: String,
    #[serde(default)]
    pub title: Option<String>,
    /// `None` leaves the flag unset.
    #[serde(default)]
    pub local: Option<bool>,
    #[serde(default = "default_published")]
    pub published: bool,
    /// Base configuration in its public map shape.
    #[serde(default)]
    pub configuration: Option<Value>,
    #[serde(default)]
    pub translations: BTreeMap<Langcode, ImportTranslation>,
}

fn default_published() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportTranslation {
    #[serde(default)]
    pub administrative_title: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// Full configuration as seen in this language; only translatable
    /// values are kept.
    #[serde(default)]
    pub configuration: Option<Value>,
}

impl ImportDocument {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
