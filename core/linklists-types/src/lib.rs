//! Core type definitions for link lists.
//!
//! This crate defines the small, plugin-agnostic value types used throughout
//! the link list core:
//! - Link list and revision identifiers (UUID v7)
//! - Language codes identifying translations
//! - [`Link`] and [`LinkCollection`], the output of link sources
//! - Cache metadata merged across links, collections and rendered output
//!
//! Plugin contracts, the configuration model and storage live in their own
//! crates.

mod cache;
mod collection;
mod ids;
mod langcode;
mod link;

pub use cache::{CacheMetadata, MaxAge};
pub use collection::LinkCollection;
pub use ids::{LinkListId, RevisionId};
pub use langcode::Langcode;
pub use link::Link;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid language code: {0:?}")]
    InvalidLangcode(String),
}
