//! Engine settings, read from a TOML file.
//!
//! ```toml
//! database_path = "link_lists.db"
//! default_langcode = "en"
//!
//! [[bundles]]
//! id = "manual"
//! label = "Manual list"
//! default_link_source = "manual_links"
//! configurable_link_source_plugins = false
//! ```

use crate::error::{EngineError, EngineResult};
use linklists_model::LinkListType;
use linklists_types::Langcode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
    /// Base language of newly created lists.
    #[serde(default = "default_langcode")]
    pub default_langcode: Langcode,
    #[serde(default = "default_bundles")]
    pub bundles: Vec<LinkListType>,
}

fn default_database_path() -> PathBuf {
    PathBuf::from("link_lists.db")
}

fn default_langcode() -> Langcode {
    Langcode::english()
}

fn default_bundles() -> Vec<LinkListType> {
    vec![
        LinkListType::new("dynamic", "Dynamic list"),
        LinkListType::new("manual", "Manual list").with_fixed_source("manual_links"),
    ]
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            default_langcode: default_langcode(),
            bundles: default_bundles(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`. A missing file yields the defaults; a
    /// file that does not parse is an error.
    pub fn load_from(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No settings file found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|source| EngineError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::parse(&contents).map_err(|source| EngineError::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            bundles = settings.bundles.len(),
            "Loaded link list settings from {:?}", path
        );
        Ok(settings)
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// The bundle definition with the given id.
    pub fn bundle(&self, id: &str) -> EngineResult<&LinkListType> {
        self.bundles
            .iter()
            .find(|b| b.id == id)
            .ok_or_else(|| EngineError::UnknownBundle(id.to_string()))
    }
}
