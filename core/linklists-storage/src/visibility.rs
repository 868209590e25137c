//! Visibility of local link lists.
//!
//! Local lists are embedded in other content and must not show up in
//! listings. Every listing query is built by [`crate::query`], which asks
//! [`listing_predicate`] for its filter; nothing else decides visibility.
//! Loading by id or revision id never goes through here.

use std::collections::BTreeSet;

/// Query tag that disables the local filter for one query.
pub const ALLOW_LOCAL_TAG: &str = "allow_local_link_lists";

/// `local` is NULL for lists saved before the flag existed; those count as
/// global.
const EXCLUDE_LOCAL: &str = "(local IS NULL OR local = 0)";

/// The SQL predicate a listing query with `tags` must add, if any.
#[must_use]
pub(crate) fn listing_predicate(tags: &BTreeSet<String>) -> Option<&'static str> {
    if tags.contains(ALLOW_LOCAL_TAG) {
        None
    } else {
        Some(EXCLUDE_LOCAL)
    }
}
