//! Rich-text content handling.

mod sanitize;

pub use sanitize::AmmoniaSanitizer;
