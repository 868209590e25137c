//! Structured output of display, no-results and more-link plugins.
//!
//! Output stays structural; turning it into markup belongs to whoever
//! consumes it. The `Display` impl is a plain-text rendition for tooling.

use linklists_types::{CacheMetadata, Link};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One piece of rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderElement {
    /// A linked item.
    Link {
        url: String,
        title: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        teaser: Option<String>,
    },
    /// An item shown without a link.
    Text { text: String },
    /// Fallback text shown instead of an empty list.
    Message { text: String },
    /// Trailing "see all" link.
    MoreLink { url: String, title: String },
}

/// Render output together with its cacheability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderedOutput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub elements: Vec<RenderElement>,
    #[serde(default)]
    pub cache: CacheMetadata,
}

impl RenderedOutput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_cache(mut self, cache: CacheMetadata) -> Self {
        self.cache = cache;
        self
    }

    pub fn push(&mut self, element: RenderElement) {
        self.elements.push(element);
    }

    /// Appends a more-link element and folds in the link's cache metadata.
    pub fn push_more_link(&mut self, link: &Link) {
        self.push(RenderElement::MoreLink {
            url: link.url.clone(),
            title: link.label().to_string(),
        });
        self.cache.merge(&link.cache);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Number of list items (linked or plain), excluding messages and
    /// the more-link.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.elements
            .iter()
            .filter(|e| matches!(e, RenderElement::Link { .. } | RenderElement::Text { .. }))
            .count()
    }

    #[must_use]
    pub fn more_link(&self) -> Option<&RenderElement> {
        self.elements
            .iter()
            .find(|e| matches!(e, RenderElement::MoreLink { .. }))
    }
}

impl fmt::Display for RenderedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(title) = &self.title {
            writeln!(f, "{title}")?;
        }
        for element in &self.elements {
            match element {
                RenderElement::Link { url, title, teaser } => {
                    writeln!(f, "- {title} <{url}>")?;
                    if let Some(teaser) = teaser {
                        writeln!(f, "  {teaser}")?;
                    }
                }
                RenderElement::Text { text } => writeln!(f, "- {text}")?,
                RenderElement::Message { text } => writeln!(f, "{text}")?,
                RenderElement::MoreLink { url, title } => writeln!(f, "» {title} <{url}>")?,
            }
        }
        Ok(())
    }
}
