//! Markup — compact HTML construction and rendering
//!
//! A small object model for building HTML trees programmatically and
//! serializing them to compact strings. Built for server-side and
//! build-time generation, where string concatenation goes wrong in the
//! usual places: attribute escaping, void-element closing, inline style
//! minification.
//!
//! ## Core design
//!
//! ```text
//! Element { tag, AttrMap, Vec<Content> } → render() → String
//!                                        → query_selector*() → &Element
//! ```
//!
//! - Values are closed tagged unions ([`AttrValue`], [`Content`]), not
//!   stringly-typed maps
//! - Attribute insertion order is preserved and reflected in output
//! - Nested content arguments flatten once, at insertion
//! - Rendering is pure: repeated calls, identical strings
//!
//! ## Example
//!
//! ```
//! use markup::{content, Element, Page};
//!
//! let mut list = Element::with_attributes("ul", [("class", "menu")]).unwrap();
//! list.add(content![
//!     Element::with_content("li", [("class", "item")], "Home").unwrap(),
//!     Element::with_content("li", [("class", "item")], "About").unwrap(),
//! ])
//! .unwrap();
//!
//! let page = Page::with_content(list).unwrap();
//! assert!(page.render().starts_with("<!doctype html><html>"));
//! ```

pub mod element;
pub mod error;
pub mod page;
pub mod query;
pub mod serializer;
pub mod style;
pub mod types;
pub mod utils;

pub use element::Element;
pub use error::{MarkupError, Result};
pub use page::{Page, DOCTYPE};
pub use query::Selector;
pub use serializer::escape_attr;
pub use style::minify_style;
pub use types::{is_void_element, Attr, AttrMap, AttrValue, Content, ContentItem, VOID_ELEMENTS};
