//! Error types for markup construction and querying
//!
//! Simple, flat error hierarchy. Every variant is an invalid-argument
//! condition raised synchronously; rendering and lookups never fail.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, MarkupError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MarkupError {
    #[error("Tag name cannot be empty")]
    EmptyTag,

    #[error("Invalid tag name: {tag:?}")]
    InvalidTag { tag: String },

    #[error("Cannot add content to void element <{tag}>")]
    VoidContent { tag: String },

    #[error("Content nesting exceeds maximum depth of {max}")]
    DepthExceeded { max: usize },

    #[error("Attribute selectors are not supported: {query:?}")]
    AttributeSelector { query: String },
}
