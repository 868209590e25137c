//! Error types for the configuration model.

use crate::configuration::PluginKind;
use linklists_types::Langcode;
use thiserror::Error;

/// Result type for configuration model operations.
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;

/// Errors raised while reading or writing a link list's configuration.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Malformed configuration input. Never persisted.
    #[error("malformed configuration: {0}")]
    Shape(String),

    /// A configuration references a plugin id that is not registered.
    #[error("{kind} plugin not found: {id}")]
    PluginNotFound { kind: PluginKind, id: String },

    #[error("translation does not exist: {0}")]
    TranslationMissing(Langcode),

    #[error("translation already exists: {0}")]
    TranslationExists(Langcode),

    #[error("the base translation ({0}) can not be removed")]
    BaseTranslation(Langcode),
}
