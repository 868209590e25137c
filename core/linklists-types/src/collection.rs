//! Ordered collection of resolved links.

use crate::cache::{CacheMetadata, MaxAge};
use crate::link::Link;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// An ordered sequence of [`Link`]s with its own cache metadata.
///
/// Insertion order is significant and the same link may appear more than
/// once. The effective cache metadata of the collection is its own metadata
/// merged with that of every contained link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkCollection {
    links: Vec<Link>,
    #[serde(default)]
    cache: CacheMetadata,
}

impl LinkCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a link at the end of the collection.
    pub fn add(&mut self, link: Link) -> &mut Self {
        self.links.push(link);
        self
    }

    /// Replaces the link at `offset`, or appends when `offset == len()`.
    /// Returns the replaced link. Offsets past the end are ignored and the
    /// link is handed back as `Err`.
    pub fn set(&mut self, offset: usize, link: Link) -> Result<Option<Link>, Link> {
        match offset.cmp(&self.links.len()) {
            std::cmp::Ordering::Less => Ok(Some(std::mem::replace(&mut self.links[offset], link))),
            std::cmp::Ordering::Equal => {
                self.links.push(link);
                Ok(None)
            }
            std::cmp::Ordering::Greater => Err(link),
        }
    }

    pub fn get(&self, offset: usize) -> Option<&Link> {
        self.links.get(offset)
    }

    /// Removes the link at `offset`, shifting later links down.
    pub fn remove(&mut self, offset: usize) -> Option<Link> {
        (offset < self.links.len()).then(|| self.links.remove(offset))
    }

    pub fn clear(&mut self) {
        self.links.clear();
    }

    /// Keeps at most `limit` links, preserving order.
    pub fn truncate(&mut self, limit: usize) {
        self.links.truncate(limit);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.links.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Link] {
        &self.links
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Link> {
        self.links
    }

    /// Collection-level cache metadata, without the contained links.
    pub fn own_cache_mut(&mut self) -> &mut CacheMetadata {
        &mut self.cache
    }

    /// Union of the collection's and every link's cache tags.
    #[must_use]
    pub fn cache_tags(&self) -> BTreeSet<String> {
        self.links.iter().fold(self.cache.tags().clone(), |mut tags, link| {
            tags.extend(link.cache.tags().iter().cloned());
            tags
        })
    }

    /// Union of the collection's and every link's cache contexts.
    #[must_use]
    pub fn cache_contexts(&self) -> BTreeSet<String> {
        self.links.iter().fold(self.cache.contexts().clone(), |mut contexts, link| {
            contexts.extend(link.cache.contexts().iter().cloned());
            contexts
        })
    }

    /// Most restrictive max-age across the collection and its links.
    #[must_use]
    pub fn cache_max_age(&self) -> MaxAge {
        self.links
            .iter()
            .fold(self.cache.max_age(), |age, link| age.merge(link.cache.max_age()))
    }

    /// Effective cache metadata (tags, contexts and max-age combined).
    #[must_use]
    pub fn cache_metadata(&self) -> CacheMetadata {
        self.links
            .iter()
            .fold(self.cache.clone(), |acc, link| acc.merged(&link.cache))
    }
}

impl FromIterator<Link> for LinkCollection {
    fn from_iter<I: IntoIterator<Item = Link>>(iter: I) -> Self {
        Self {
            links: iter.into_iter().collect(),
            cache: CacheMetadata::default(),
        }
    }
}

impl Extend<Link> for LinkCollection {
    fn extend<I: IntoIterator<Item = Link>>(&mut self, iter: I) {
        self.links.extend(iter);
    }
}

impl IntoIterator for LinkCollection {
    type Item = Link;
    type IntoIter = std::vec::IntoIter<Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.into_iter()
    }
}

impl<'a> IntoIterator for &'a LinkCollection {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}
