//! Plugin layer for link lists.
//!
//! Four plugin kinds fill the slots of a link list configuration:
//!
//! - [`LinkSource`] resolves links,
//! - [`LinkDisplay`] renders them,
//! - [`NoResultsBehaviour`] renders a fallback when there are none,
//! - [`MoreLink`] builds an optional trailing "see all" link.
//!
//! Plugins are looked up by string id in a [`PluginRegistry`], which also
//! tells the configuration model which values each plugin lets editors
//! translate.

pub mod builtin;
mod error;
mod registry;
mod render;
mod traits;

pub use error::{PluginError, PluginResult};
pub use registry::{PluginDefinition, PluginManager, PluginRegistry};
pub use render::{RenderElement, RenderedOutput};
pub use traits::{
    ConfigurablePlugin, LinkDisplay, LinkSource, MoreLink, MoreLinkContext, NoResultsBehaviour,
    with_defaults,
};
