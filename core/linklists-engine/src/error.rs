//! Error types for the engine.

use linklists_model::{ConfigurationError, PluginKind, Violation};
use linklists_plugin::PluginError;
use linklists_storage::StorageError;
use linklists_types::LinkListId;
use std::path::PathBuf;
use thiserror::Error;

pub type EngineResult<T> = Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Every violation found before a save. Nothing was written.
    #[error("link list is invalid: {}", join_violations(.0))]
    Validation(Vec<Violation>),

    /// A slot the pipeline needs has no plugin selected.
    #[error("no {0} plugin selected")]
    MissingPlugin(PluginKind),

    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error(transparent)]
    Plugin(#[from] PluginError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("link list not found: {0}")]
    NotFound(LinkListId),

    #[error("unknown link list type: {0}")]
    UnknownBundle(String),

    #[error("failed to read settings {path:?}: {source}")]
    SettingsIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings {path:?}: {source}")]
    SettingsParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid import document: {0}")]
    Import(String),
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
