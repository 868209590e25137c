//! Cacheability metadata carried by links, collections and rendered output.
//!
//! Tags and contexts combine as set unions. Max-age combines to the most
//! restrictive value, where [`MaxAge::Permanent`] is the identity element.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How long a computed value may be cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxAge {
    /// No expiry.
    #[default]
    Permanent,
    /// Expires after the given number of seconds. `Seconds(0)` is uncacheable.
    Seconds(u32),
}

impl MaxAge {
    /// Returns the more restrictive of the two values.
    #[must_use]
    pub fn merge(self, other: MaxAge) -> MaxAge {
        match (self, other) {
            (MaxAge::Permanent, other) => other,
            (this, MaxAge::Permanent) => this,
            (MaxAge::Seconds(a), MaxAge::Seconds(b)) => MaxAge::Seconds(a.min(b)),
        }
    }
}

/// Cache tags, contexts and max-age of a value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheMetadata {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    contexts: BTreeSet<String>,
    #[serde(default)]
    max_age: MaxAge,
}

impl CacheMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style helper adding tags.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_tags(tags);
        self
    }

    /// Builder-style helper adding contexts.
    #[must_use]
    pub fn with_contexts<I, S>(mut self, contexts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_contexts(contexts);
        self
    }

    /// Builder-style helper restricting the max-age.
    #[must_use]
    pub fn with_max_age(mut self, max_age: MaxAge) -> Self {
        self.restrict_max_age(max_age);
        self
    }

    pub fn add_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
    }

    pub fn add_contexts<I, S>(&mut self, contexts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contexts.extend(contexts.into_iter().map(Into::into));
    }

    /// Lowers the max-age to `max_age` if that is more restrictive.
    pub fn restrict_max_age(&mut self, max_age: MaxAge) {
        self.max_age = self.max_age.merge(max_age);
    }

    /// Folds another set of metadata into this one.
    pub fn merge(&mut self, other: &CacheMetadata) {
        self.tags.extend(other.tags.iter().cloned());
        self.contexts.extend(other.contexts.iter().cloned());
        self.restrict_max_age(other.max_age);
    }

    /// Returns the combination of both without mutating either.
    #[must_use]
    pub fn merged(&self, other: &CacheMetadata) -> CacheMetadata {
        let mut out = self.clone();
        out.merge(other);
        out
    }

    #[must_use]
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    #[must_use]
    pub fn contexts(&self) -> &BTreeSet<String> {
        &self.contexts
    }

    #[must_use]
    pub fn max_age(&self) -> MaxAge {
        self.max_age
    }
}
