//! Error types for the plugin layer.

use linklists_model::PluginKind;
use thiserror::Error;

pub type PluginResult<T> = Result<T, PluginError>;

#[derive(Debug, Error)]
pub enum PluginError {
    /// A configuration references an id nobody registered. Fatal for the
    /// slot that needed it.
    #[error("{kind} plugin not found: {id}")]
    PluginNotFound { kind: PluginKind, id: String },

    #[error("{kind} plugin already registered: {id}")]
    PluginAlreadyRegistered { kind: PluginKind, id: String },

    #[error("invalid configuration for plugin '{plugin_id}': {message}")]
    InvalidConfiguration { plugin_id: String, message: String },

    /// The backend a source reads from failed.
    #[error("link source '{plugin_id}' failed: {message}")]
    SourceFailed { plugin_id: String, message: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
