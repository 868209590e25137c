//! Link list engine.
//!
//! Ties the configuration model, the plugin registry and storage together:
//!
//! - [`LinkListRenderer`] runs the resolution pipeline (source, size limit,
//!   display or no-results fallback, more-link)
//! - [`prepare_for_save`] applies bundle defaults, plugin `pre_save` hooks
//!   and validation before a list is written
//! - [`Settings`] holds the database path, default language and bundles
//! - [`LinkListService`] is the facade used by the command line tool

mod error;
mod import;
mod pipeline;
mod presave;
mod service;
mod settings;

pub use error::{EngineError, EngineResult};
pub use import::{ImportDocument, ImportTranslation};
pub use pipeline::{LinkListRenderer, link_list_cache_tag};
pub use presave::prepare_for_save;
pub use service::LinkListService;
pub use settings::Settings;
