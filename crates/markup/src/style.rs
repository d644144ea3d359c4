//! Inline CSS minification
//!
//! Applied to `style` attribute values at render time. Pure string
//! transform, idempotent on its own output.

use regex::Regex;
use std::sync::LazyLock;

// Block comments, non-greedy, no nesting.
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("COMMENT_RE: invalid regex pattern"));

// Runs of two or more whitespace characters.
static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("WHITESPACE_RUN_RE: invalid regex pattern"));

// Whitespace hugging declaration punctuation.
static PUNCTUATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*([:;{}])\s*").expect("PUNCTUATION_RE: invalid regex pattern")
});

/// Minify an inline style: strip comments, collapse whitespace, drop
/// spacing around `:`/`;`/`{`/`}`, and trim a single trailing `;`.
///
/// Minifying an already-minified string returns it unchanged.
pub fn minify_style(css: &str) -> String {
    let css = COMMENT_RE.replace_all(css, "");
    let css = WHITESPACE_RUN_RE.replace_all(&css, " ");
    let css = PUNCTUATION_RE.replace_all(&css, "$1");
    // Redundant after the punctuation pass; kept for exact legacy output.
    let css = css.replace(": ", ":");
    let css = css.strip_suffix(';').unwrap_or(&css);
    css.trim().to_string()
}
