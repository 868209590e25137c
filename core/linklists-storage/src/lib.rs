//! SQLite storage layer for link lists.
//!
//! # Architecture
//!
//! - The current revision of each list is stored as a JSON payload next to
//!   the columns listing queries filter and sort on
//! - Every save appends an immutable revision snapshot
//! - Listings (`load_multiple(None)`, `load_by_properties`, `query`) hide
//!   local lists unless tagged with [`ALLOW_LOCAL_TAG`]
//! - Loads by id or revision id always return the list, local or not
//! - Saves and deletes invalidate the [`DerivativeRegistry`]

mod derivatives;
mod error;
mod query;
mod store;
mod visibility;

pub use derivatives::{BLOCK_CATEGORY, BlockDefinition, DerivativeRegistry};
pub use error::{StorageError, StorageResult};
pub use query::{Field, LinkListQuery, Operator, PropertyValue, SortDirection};
pub use store::LinkListStore;
pub use visibility::ALLOW_LOCAL_TAG;
