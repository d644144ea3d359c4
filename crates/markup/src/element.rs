//! The `Element` node: construction and mutation
//!
//! An element owns its tag, an ordered attribute map, and a flat list of
//! content leaves. Children are owned by value; the tree is acyclic by
//! construction. Rendering lives in [`crate::serializer`], querying in
//! [`crate::query`].

use crate::error::{MarkupError, Result};
use crate::types::{is_void_element, AttrMap, AttrValue, Content, ContentItem};
use serde::{Deserialize, Serialize};

/// A single HTML element.
///
/// The tag is validated and normalized once, at construction, and is
/// immutable afterwards. All mutation goes through [`Element::add`] and
/// [`Element::set_attribute`], which uphold the void-element and
/// normalization invariants; [`Element::set_content_unchecked`] is the
/// single escape hatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    tag: String,
    attributes: AttrMap,
    content: Vec<Content>,
}

impl Element {
    /// Create an element with no attributes and no content.
    ///
    /// The tag is trimmed, validated against `[A-Za-z0-9-]+`, and
    /// lowercased. Anything else is an error.
    pub fn new(tag: impl AsRef<str>) -> Result<Self> {
        Ok(Self {
            tag: normalize_tag(tag.as_ref())?,
            attributes: AttrMap::new(),
            content: Vec::new(),
        })
    }

    /// Create an element and apply an ordered set of attributes.
    ///
    /// Each entry goes through the same normalization as
    /// [`Element::set_attribute`].
    pub fn with_attributes<K, V, I>(tag: impl AsRef<str>, attrs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        let mut element = Self::new(tag)?;
        for (name, value) in attrs {
            element.set_attribute(name, value);
        }
        Ok(element)
    }

    /// Create an element with attributes and initial content.
    ///
    /// Content may be arbitrarily nested lists; it is flattened in order.
    /// Supplying non-empty content for a void tag is an error.
    pub fn with_content<K, V, I>(
        tag: impl AsRef<str>,
        attrs: I,
        content: impl Into<ContentItem>,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        let mut element = Self::with_attributes(tag, attrs)?;
        let mut leaves = Vec::new();
        content.into().flatten_into(&mut leaves, 0)?;
        if !leaves.is_empty() {
            if element.is_void() {
                return Err(MarkupError::VoidContent {
                    tag: element.tag.clone(),
                });
            }
            element.content = leaves;
        }
        Ok(element)
    }

    /// The normalized (lowercase) tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether this element's tag is in the void set.
    pub fn is_void(&self) -> bool {
        is_void_element(&self.tag)
    }

    /// The ordered attribute map.
    pub fn attributes(&self) -> &AttrMap {
        &self.attributes
    }

    /// The stored content leaves, in insertion order. Empty for void
    /// elements and for elements with no content.
    pub fn content(&self) -> &[Content] {
        &self.content
    }

    pub(crate) fn content_mut(&mut self) -> &mut Vec<Content> {
        &mut self.content
    }

    /// Store an attribute, normalizing the name (trim + lowercase).
    ///
    /// The value is stored verbatim; see [`AttrValue`] for how each
    /// variant renders. Returns a reference to the stored value.
    pub fn set_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> &AttrValue {
        self.attributes.set(name, value)
    }

    /// Exact alias of [`Element::set_attribute`].
    pub fn add_attribute(
        &mut self,
        name: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> &AttrValue {
        self.set_attribute(name, value)
    }

    /// Look up an attribute value. Never fails; absent names yield `None`.
    pub fn get_attribute(&self, name: &str) -> Option<&AttrValue> {
        self.attributes.get(name)
    }

    /// Append content to this element.
    ///
    /// Accepts anything convertible to [`ContentItem`]: strings, numbers,
    /// booleans (coerced to `"true"`/`"false"` text), elements, and
    /// arbitrarily nested lists of those, which are flattened depth-first
    /// in argument order. Chainable.
    ///
    /// Errors if this element is void, or if list nesting exceeds the
    /// flatten guard.
    pub fn add(&mut self, item: impl Into<ContentItem>) -> Result<&mut Self> {
        if self.is_void() {
            return Err(MarkupError::VoidContent {
                tag: self.tag.clone(),
            });
        }
        item.into().flatten_into(&mut self.content, 0)?;
        Ok(self)
    }

    /// Replace the stored content wholesale, bypassing the void check and
    /// all validation.
    ///
    /// This takes the internal representation directly and performs no
    /// flattening. Low-level; prefer [`Element::add`] for anything that
    /// should respect the element's invariants.
    pub fn set_content_unchecked(&mut self, content: Vec<Content>) {
        self.content = content;
    }
}

fn normalize_tag(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MarkupError::EmptyTag);
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(MarkupError::InvalidTag {
            tag: raw.to_string(),
        });
    }
    Ok(trimmed.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_normalization() {
        assert_eq!(Element::new("DIV").unwrap().tag(), "div");
        assert_eq!(Element::new(" span ").unwrap().tag(), "span");
        assert_eq!(Element::new("my-widget").unwrap().tag(), "my-widget");
    }

    #[test]
    fn test_tag_validation() {
        assert_eq!(Element::new("").unwrap_err(), MarkupError::EmptyTag);
        assert_eq!(Element::new("   ").unwrap_err(), MarkupError::EmptyTag);
        assert!(matches!(
            Element::new("di v").unwrap_err(),
            MarkupError::InvalidTag { .. }
        ));
        assert!(matches!(
            Element::new("div>").unwrap_err(),
            MarkupError::InvalidTag { .. }
        ));
        assert!(matches!(
            Element::new("a_b").unwrap_err(),
            MarkupError::InvalidTag { .. }
        ));
    }

    #[test]
    fn test_add_chains_in_order() {
        let mut div = Element::new("div").unwrap();
        div.add("Hello").unwrap();
        let span = Element::with_content("span", std::iter::empty::<(&str, &str)>(), "World");
        div.add(span.unwrap()).unwrap();
        assert_eq!(div.content().len(), 2);
        assert_eq!(div.render(), "<div>Hello<span>World</span></div>");
    }

    #[test]
    fn test_add_rejects_void() {
        let mut img = Element::new("img").unwrap();
        let err = img.add("content").unwrap_err();
        assert_eq!(
            err,
            MarkupError::VoidContent {
                tag: "img".to_string()
            }
        );
    }

    #[test]
    fn test_with_content_rejects_void() {
        let err =
            Element::with_content("img", [("src", "#")], "content").unwrap_err();
        assert_eq!(
            err,
            MarkupError::VoidContent {
                tag: "img".to_string()
            }
        );
    }

    #[test]
    fn test_with_content_allows_empty_content_on_void() {
        // An empty list is "no content supplied", even for void tags.
        let img =
            Element::with_content("img", [("src", "#")], Vec::<String>::new()).unwrap();
        assert!(img.content().is_empty());
    }

    #[test]
    fn test_set_attribute_returns_stored_value() {
        let mut el = Element::new("p").unwrap();
        let stored = el.set_attribute("Class", "header");
        assert_eq!(stored.as_text(), Some("header"));
        assert_eq!(
            el.get_attribute("class").and_then(AttrValue::as_text),
            Some("header")
        );
    }

    #[test]
    fn test_add_attribute_is_alias() {
        let mut el = Element::new("div").unwrap();
        el.add_attribute("id", "x");
        assert_eq!(
            el.get_attribute("id").and_then(AttrValue::as_text),
            Some("x")
        );
    }

    #[test]
    fn test_get_attribute_absent() {
        let el = Element::new("div").unwrap();
        assert!(el.get_attribute("missing").is_none());
    }

    #[test]
    fn test_set_content_unchecked_bypasses_void_check() {
        let mut img = Element::new("img").unwrap();
        img.set_content_unchecked(vec![Content::Text("ignored".to_string())]);
        // Rendering still short-circuits on the void tag.
        assert_eq!(img.render(), "<img />");
    }
}
