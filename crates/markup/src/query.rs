//! CSS-selector-style querying over direct children
//!
//! Deliberately shallow: a query inspects only the receiving element's
//! direct content entries that are elements, never the full subtree.
//! That one-level search is contract behavior, preserved from the
//! system this model replaces.
//!
//! Supported: tag, `.class`, `#id`, `*`, and comma-separated unions of
//! those. Matching is exact string equality; there are no combinators,
//! no multi-class handling, and no attribute selectors (`[` is an
//! error).

use crate::element::Element;
use crate::error::{MarkupError, Result};
use crate::types::{AttrValue, Content};
use tracing::trace;

/// A parsed single-branch selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Tag(String),
    Class(String),
    Id(String),
    Universal,
}

impl Selector {
    /// Parse one branch (no commas). The input is trimmed first.
    pub fn parse(query: &str) -> Result<Self> {
        let query = query.trim();
        if query.contains('[') {
            return Err(MarkupError::AttributeSelector {
                query: query.to_string(),
            });
        }
        if query == "*" {
            Ok(Selector::Universal)
        } else if let Some(class) = query.strip_prefix('.') {
            Ok(Selector::Class(class.to_string()))
        } else if let Some(id) = query.strip_prefix('#') {
            Ok(Selector::Id(id.to_string()))
        } else {
            // Tag queries are matched exactly, without case folding.
            Ok(Selector::Tag(query.to_string()))
        }
    }

    /// Whether a single element matches this selector.
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Selector::Universal => true,
            Selector::Tag(tag) => element.tag() == tag,
            Selector::Class(class) => attr_text(element, "class") == Some(class.as_str()),
            Selector::Id(id) => attr_text(element, "id") == Some(id.as_str()),
        }
    }
}

/// Textual attribute payload; bare and boolean values never match.
fn attr_text<'a>(element: &'a Element, name: &str) -> Option<&'a str> {
    match element.get_attribute(name) {
        Some(AttrValue::Text(text)) => Some(text.as_str()),
        _ => None,
    }
}

impl Element {
    /// Collect direct children matching the query, in content order.
    ///
    /// Comma-separated branches are evaluated independently and their
    /// results concatenated in branch order; duplicates across branches
    /// are kept. A `[` anywhere in a branch is an error.
    pub fn query_selector_all(&self, query: &str) -> Result<Vec<&Element>> {
        let mut matches = Vec::new();
        for branch in query.split(',') {
            let selector = Selector::parse(branch)?;
            for part in self.content() {
                if let Content::Element(child) = part {
                    if selector.matches(child) {
                        matches.push(child);
                    }
                }
            }
        }
        trace!(query, count = matches.len(), "query selection");
        Ok(matches)
    }

    /// First direct child matching the query, or `None`.
    pub fn query_selector(&self, query: &str) -> Result<Option<&Element>> {
        Ok(self.query_selector_all(query)?.into_iter().next())
    }
}
