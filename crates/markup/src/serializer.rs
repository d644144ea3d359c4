//! Rendering the markup tree to compact strings
//!
//! Single pass, push_str into one pre-allocated buffer. Rendering is a
//! pure function of the element's current state: no caching, no interior
//! mutability, repeated calls produce identical output.
//!
//! Escaping applies to attribute values only (`&`, `<`, `>`, `"`); text
//! content is emitted verbatim.

use crate::element::Element;
use crate::style::minify_style;
use crate::types::{AttrValue, Content};
use std::borrow::Cow;
use std::fmt;

/// Escape an attribute value for double-quoted emission.
///
/// Returns the input unchanged (borrowed) when nothing needs escaping.
pub fn escape_attr(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }
    let mut out = String::with_capacity(value.len() + 8);
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

impl Element {
    /// Render this element and its content to an HTML string.
    ///
    /// Idempotent and side-effect free; callable any number of times.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(256);
        render_into(self, &mut out);
        out
    }
}

/// Serialize a single element recursively.
pub(crate) fn render_into(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag());

    for attr in element.attributes().iter() {
        match &attr.value {
            // `false` suppresses the attribute entirely.
            AttrValue::Bool(false) => {}
            // `true` and the no-value sentinel both render bare.
            AttrValue::Bool(true) | AttrValue::Null => {
                out.push(' ');
                out.push_str(&attr.name);
            }
            AttrValue::Text(value) => {
                out.push(' ');
                out.push_str(&attr.name);
                out.push_str("=\"");
                if attr.name == "style" {
                    out.push_str(&escape_attr(&minify_style(value)));
                } else {
                    out.push_str(&escape_attr(value));
                }
                out.push('"');
            }
        }
    }

    if element.is_void() {
        out.push_str(" />");
        return;
    }
    out.push('>');

    for part in element.content() {
        match part {
            Content::Element(child) => render_into(child, out),
            Content::Text(text) => out.push_str(text),
        }
    }

    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
