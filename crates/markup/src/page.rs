//! The `Page` document wrapper
//!
//! A page composes a `head` and `body` element under a synthetic `html`
//! root and prefixes rendering with the doctype. It is composition, not
//! a subtype: the only behavior it adds to [`Element`] is the prefix.

use crate::element::Element;
use crate::error::Result;
use crate::serializer::render_into;
use crate::types::{AttrValue, Content, ContentItem};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Doctype literal prepended to page rendering.
pub const DOCTYPE: &str = "<!doctype html>";

/// An HTML document: an `html` root whose content is exactly
/// `[head, body]`.
///
/// Caller-supplied content lands in `body`; `head`, `body`, and the root
/// stay reachable for later mutation through the accessor pairs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    root: Element,
}

impl Page {
    /// Create a page with an empty head and body.
    pub fn new() -> Self {
        let mut root = known_element("html");
        root.set_content_unchecked(vec![
            Content::Element(known_element("head")),
            Content::Element(known_element("body")),
        ]);
        debug!("constructed page");
        Self { root }
    }

    /// Create a page whose body holds the given content.
    pub fn with_content(content: impl Into<ContentItem>) -> Result<Self> {
        let mut page = Self::new();
        page.body_mut().add(content)?;
        Ok(page)
    }

    /// Create a page with body content plus attributes on the `html` and
    /// `body` elements.
    pub fn with_attributes<C, I, K, V, J, L, W>(
        content: C,
        html_attrs: I,
        body_attrs: J,
    ) -> Result<Self>
    where
        C: Into<ContentItem>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
        J: IntoIterator<Item = (L, W)>,
        L: Into<String>,
        W: Into<AttrValue>,
    {
        let mut page = Self::with_content(content)?;
        for (name, value) in html_attrs {
            page.root.set_attribute(name, value);
        }
        for (name, value) in body_attrs {
            page.body_mut().set_attribute(name, value);
        }
        Ok(page)
    }

    /// The synthetic `html` root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// The `head` element.
    ///
    /// # Panics
    ///
    /// Panics if the root's content was rewired through
    /// [`Element::set_content_unchecked`].
    pub fn head(&self) -> &Element {
        self.child(0)
    }

    pub fn head_mut(&mut self) -> &mut Element {
        self.child_mut(0)
    }

    /// The `body` element.
    ///
    /// # Panics
    ///
    /// Panics if the root's content was rewired through
    /// [`Element::set_content_unchecked`].
    pub fn body(&self) -> &Element {
        self.child(1)
    }

    pub fn body_mut(&mut self) -> &mut Element {
        self.child_mut(1)
    }

    fn child(&self, slot: usize) -> &Element {
        match &self.root.content()[slot] {
            Content::Element(element) => element,
            Content::Text(_) => unreachable!("page root holds element children"),
        }
    }

    fn child_mut(&mut self, slot: usize) -> &mut Element {
        match &mut self.root.content_mut()[slot] {
            Content::Element(element) => element,
            Content::Text(_) => unreachable!("page root holds element children"),
        }
    }

    /// Render the document: doctype literal followed by the root render.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(512);
        out.push_str(DOCTYPE);
        render_into(&self.root, &mut out);
        out
    }

    /// Query the root's direct children (`head` and `body`).
    pub fn query_selector_all(&self, query: &str) -> Result<Vec<&Element>> {
        self.root.query_selector_all(query)
    }

    /// First direct child of the root matching the query.
    pub fn query_selector(&self, query: &str) -> Result<Option<&Element>> {
        self.root.query_selector(query)
    }
}

// Tag literals used by the page wiring are statically valid.
fn known_element(tag: &str) -> Element {
    Element::new(tag).expect("page tag literal is valid")
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page() {
        let page = Page::new();
        assert_eq!(
            page.render(),
            "<!doctype html><html><head></head><body></body></html>"
        );
        assert_eq!(page.to_string(), page.render());
    }

    #[test]
    fn test_content_goes_into_body() {
        let page = Page::with_content("Hello").unwrap();
        assert_eq!(
            page.render(),
            "<!doctype html><html><head></head><body>Hello</body></html>"
        );
    }

    #[test]
    fn test_head_and_body_mutable_after_construction() {
        let mut page = Page::new();
        page.head_mut()
            .add(Element::with_attributes("meta", [("charset", "utf-8")]).unwrap())
            .unwrap();
        page.body_mut().add("text").unwrap();
        assert_eq!(
            page.render(),
            "<!doctype html><html><head><meta charset=\"utf-8\" /></head><body>text</body></html>"
        );
    }

    #[test]
    fn test_with_attributes() {
        let page = Page::with_attributes(
            "content",
            [("lang", "en")],
            [("class", "dark")],
        )
        .unwrap();
        assert_eq!(
            page.render(),
            "<!doctype html><html lang=\"en\"><head></head><body class=\"dark\">content</body></html>"
        );
    }

    #[test]
    fn test_query_sees_head_and_body_only() {
        let page = Page::with_content(Element::new("p").unwrap()).unwrap();
        assert_eq!(page.query_selector_all("*").unwrap().len(), 2);
        assert!(page.query_selector("body").unwrap().is_some());
        // Body's own children are below the shallow search horizon.
        assert!(page.query_selector("p").unwrap().is_none());
    }
}
