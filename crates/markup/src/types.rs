//! Core value model for the markup tree
//!
//! Key design principles:
//! 1. Closed tagged unions instead of `any`-typed values
//! 2. SmallVec for attribute storage (most elements carry <4 attributes)
//! 3. Insertion order is data: the attribute map preserves it and
//!    rendering reflects it
//! 4. Nested content arguments are flattened once, at insertion

use crate::element::Element;
use crate::error::{MarkupError, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::borrow::Cow;

/// Tags that never hold content and self-close when rendered.
///
/// This is a closed set: membership here is the contract, not a general
/// statement about HTML.
pub const VOID_ELEMENTS: &[&str] = &[
    "img", "input", "br", "wbr", "hr", "embed", "meta", "link", "col", "area", "base", "rect",
];

/// Check whether a tag self-closes and rejects content.
pub fn is_void_element(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Maximum nesting depth accepted when flattening content arguments.
pub(crate) const MAX_NESTING_DEPTH: usize = 64;

/// Attribute value
///
/// Rendering semantics:
/// - `Text(s)` → ` name="s"` (escaped, `style` values minified first)
/// - `Bool(true)` → bare ` name`
/// - `Bool(false)` → attribute omitted entirely
/// - `Null` → bare ` name`, same as `Bool(true)`
///
/// The `false`-omits / `Null`-renders asymmetry is load-bearing and must
/// not be collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    Bool(bool),
    Null,
}

impl AttrValue {
    /// Text payload, if this is a textual value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this value renders as a bare attribute name.
    pub fn is_bare(&self) -> bool {
        matches!(self, AttrValue::Bool(true) | AttrValue::Null)
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<Cow<'_, str>> for AttrValue {
    fn from(value: Cow<'_, str>) -> Self {
        AttrValue::Text(value.into_owned())
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        AttrValue::Bool(value)
    }
}

macro_rules! attr_value_from_number {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    AttrValue::Text(value.to_string())
                }
            }
        )*
    };
}

attr_value_from_number!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64);

/// A single named attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attr {
    pub name: String,
    pub value: AttrValue,
}

/// Insertion-ordered, name-unique attribute mapping
///
/// Names are lowercased and trimmed on every insertion path. Overwriting
/// an existing name replaces the value in place, keeping the original
/// insertion position.
#[derive(Debug, Clone, Default)]
pub struct AttrMap {
    entries: SmallVec<[Attr; 4]>,
    index: AHashMap<String, usize>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a map from a plain entry list (deserialization path).
    /// Duplicate names collapse with last-write-wins semantics.
    fn from_entries(entries: SmallVec<[Attr; 4]>) -> Self {
        let mut map = Self::new();
        for attr in entries {
            map.set(attr.name, attr.value);
        }
        map
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store a value under a normalized name, returning a reference to
    /// the stored value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> &AttrValue {
        let name = normalize_attr_name(&name.into());
        let value = value.into();
        match self.index.get(name.as_str()) {
            Some(&slot) => {
                self.entries[slot].value = value;
                &self.entries[slot].value
            }
            None => {
                let slot = self.entries.len();
                self.index.insert(name.clone(), slot);
                self.entries.push(Attr { name, value });
                &self.entries[slot].value
            }
        }
    }

    /// Look up a value by name. Lookup normalizes the same way `set` does.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        let trimmed = name.trim();
        let key: Cow<'_, str> = if trimmed.bytes().any(|b| b.is_ascii_uppercase()) {
            Cow::Owned(trimmed.to_ascii_lowercase())
        } else {
            Cow::Borrowed(trimmed)
        };
        self.index
            .get(key.as_ref())
            .map(|&slot| &self.entries[slot].value)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.entries.iter()
    }
}

fn normalize_attr_name(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}

impl PartialEq for AttrMap {
    fn eq(&self, other: &Self) -> bool {
        // The index is derived data; entry order and values decide equality.
        self.entries == other.entries
    }
}

impl Eq for AttrMap {}

impl Serialize for AttrMap {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AttrMap {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = SmallVec::<[Attr; 4]>::deserialize(deserializer)?;
        Ok(Self::from_entries(entries))
    }
}

/// A stored content leaf: flat text or a nested element.
///
/// Booleans and numbers are coerced to their text form before they reach
/// this type, so storage and rendering are uniform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Content {
    Text(String),
    Element(Element),
}

/// A content argument as supplied by callers.
///
/// Unlike [`Content`], this may be an arbitrarily nested list; insertion
/// flattens it depth-first, left-to-right, into the flat stored form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentItem {
    Text(String),
    Element(Element),
    List(Vec<ContentItem>),
}

impl ContentItem {
    /// Flatten into stored leaves, preserving order.
    ///
    /// Nesting past [`MAX_NESTING_DEPTH`] levels is rejected rather than
    /// recursed into.
    pub(crate) fn flatten_into(self, out: &mut Vec<Content>, depth: usize) -> Result<()> {
        match self {
            ContentItem::Text(text) => out.push(Content::Text(text)),
            ContentItem::Element(element) => out.push(Content::Element(element)),
            ContentItem::List(items) => {
                if depth >= MAX_NESTING_DEPTH {
                    return Err(MarkupError::DepthExceeded {
                        max: MAX_NESTING_DEPTH,
                    });
                }
                for item in items {
                    item.flatten_into(out, depth + 1)?;
                }
            }
        }
        Ok(())
    }
}

impl From<&str> for ContentItem {
    fn from(value: &str) -> Self {
        ContentItem::Text(value.to_string())
    }
}

impl From<String> for ContentItem {
    fn from(value: String) -> Self {
        ContentItem::Text(value)
    }
}

impl From<Cow<'_, str>> for ContentItem {
    fn from(value: Cow<'_, str>) -> Self {
        ContentItem::Text(value.into_owned())
    }
}

impl From<bool> for ContentItem {
    fn from(value: bool) -> Self {
        // Booleans become literal text at the boundary.
        ContentItem::Text(if value { "true" } else { "false" }.to_string())
    }
}

macro_rules! content_item_from_number {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for ContentItem {
                fn from(value: $ty) -> Self {
                    ContentItem::Text(value.to_string())
                }
            }
        )*
    };
}

content_item_from_number!(i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64);

impl From<Element> for ContentItem {
    fn from(value: Element) -> Self {
        ContentItem::Element(value)
    }
}

impl From<Content> for ContentItem {
    fn from(value: Content) -> Self {
        match value {
            Content::Text(text) => ContentItem::Text(text),
            Content::Element(element) => ContentItem::Element(element),
        }
    }
}

impl<T: Into<ContentItem>> From<Vec<T>> for ContentItem {
    fn from(items: Vec<T>) -> Self {
        ContentItem::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ContentItem>, const N: usize> From<[T; N]> for ContentItem {
    fn from(items: [T; N]) -> Self {
        ContentItem::List(items.into_iter().map(Into::into).collect())
    }
}

/// Build a [`ContentItem::List`] from heterogeneous arguments.
///
/// ```
/// use markup::{content, Element};
///
/// let mut div = Element::new("div").unwrap();
/// div.add(content!["a", ["b", "c"], "d"]).unwrap();
/// assert_eq!(div.render(), "<div>abcd</div>");
/// ```
#[macro_export]
macro_rules! content {
    () => {
        $crate::ContentItem::List(Vec::new())
    };
    ($($item:expr),+ $(,)?) => {
        $crate::ContentItem::List(vec![$($crate::ContentItem::from($item)),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_void_set_membership() {
        for tag in VOID_ELEMENTS {
            assert!(is_void_element(tag));
        }
        assert!(is_void_element("IMG"));
        assert!(!is_void_element("div"));
        assert!(!is_void_element("button"));
    }

    #[test]
    fn test_attr_value_conversions() {
        assert_eq!(AttrValue::from("x"), AttrValue::Text("x".to_string()));
        assert_eq!(AttrValue::from(0), AttrValue::Text("0".to_string()));
        assert_eq!(AttrValue::from(1.5), AttrValue::Text("1.5".to_string()));
        assert_eq!(AttrValue::from(true), AttrValue::Bool(true));
        assert!(AttrValue::Null.is_bare());
        assert!(AttrValue::Bool(true).is_bare());
        assert!(!AttrValue::Bool(false).is_bare());
        assert!(!AttrValue::from("x").is_bare());
    }

    #[test]
    fn test_attr_map_insertion_order() {
        let mut map = AttrMap::new();
        map.set("style", "margin:0");
        map.set("class", "foo");
        map.set("id", "bar");

        let names: Vec<&str> = map.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["style", "class", "id"]);
    }

    #[test]
    fn test_attr_map_last_write_wins_keeps_position() {
        let mut map = AttrMap::new();
        map.set("a", "1");
        map.set("b", "2");
        map.set("a", "3");

        let entries: Vec<(&str, &AttrValue)> =
            map.iter().map(|a| (a.name.as_str(), &a.value)).collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "a");
        assert_eq!(entries[0].1.as_text(), Some("3"));
        assert_eq!(entries[1].0, "b");
    }

    #[test]
    fn test_attr_map_name_normalization() {
        let mut map = AttrMap::new();
        map.set(" Data-Foo ", "1");
        assert_eq!(map.get("data-foo").and_then(AttrValue::as_text), Some("1"));
        assert_eq!(map.get("DATA-FOO").and_then(AttrValue::as_text), Some("1"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_flatten_preserves_order() {
        let item = ContentItem::from(vec![
            ContentItem::from("a"),
            ContentItem::from(["b", "c"]),
            ContentItem::from("d"),
        ]);
        let mut out = Vec::new();
        item.flatten_into(&mut out, 0).unwrap();
        let texts: Vec<&str> = out
            .iter()
            .map(|c| match c {
                Content::Text(t) => t.as_str(),
                Content::Element(_) => panic!("expected text"),
            })
            .collect();
        assert_eq!(texts, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_flatten_depth_guard() {
        let mut item = ContentItem::from("leaf");
        for _ in 0..(MAX_NESTING_DEPTH + 1) {
            item = ContentItem::List(vec![item]);
        }
        let mut out = Vec::new();
        let err = item.flatten_into(&mut out, 0).unwrap_err();
        assert_eq!(
            err,
            MarkupError::DepthExceeded {
                max: MAX_NESTING_DEPTH
            }
        );
    }

    #[test]
    fn test_bool_content_coerces_to_text() {
        assert_eq!(
            ContentItem::from(true),
            ContentItem::Text("true".to_string())
        );
        assert_eq!(
            ContentItem::from(false),
            ContentItem::Text("false".to_string())
        );
    }
}
