//! Link list entity model.
//!
//! Defines the types every other link list crate depends on:
//! - [`LinkList`] - the translatable entity (ids, bundle, status, locality)
//! - [`LinkListType`] - the bundle definition read when lists are created
//! - [`LinkListConfiguration`] / [`ConfigurationOverride`] - the full and
//!   the sparse per-translation configuration shapes
//! - [`Locality`] - the tri-state flag hiding embedded lists from listings
//! - [`Violation`] - structural validation results
//!
//! The configuration of a list is read and written only through
//! [`LinkList::configuration`] and [`LinkList::set_configuration`]. The
//! plugin registry is consulted through the narrow [`TranslatableLookup`]
//! trait to learn which values a plugin allows translating.

mod configuration;
mod entity;
mod error;
mod link_list_type;
mod locality;
mod merge;
mod translatable;
mod validation;

pub use configuration::{
    ConfigurationOverride, LinkListConfiguration, PluginKind, PluginSlot, SlotOverride,
    deep_merge, extract_paths,
};
pub use entity::LinkList;
pub use error::{ConfigurationError, ConfigurationResult};
pub use link_list_type::LinkListType;
pub use locality::Locality;
pub use merge::apply_override;
pub use translatable::{Translatability, TranslatableLookup};
pub use validation::{
    NO_ADMINISTRATIVE_TITLE_MESSAGE, NO_DISPLAY_MESSAGE, NO_SOURCE_MESSAGE, Violation,
    validate_configuration,
};
