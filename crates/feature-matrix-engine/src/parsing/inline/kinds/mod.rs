//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`MarkdownLink`**: `TEXT_OPEN = b'['`, `TEXT_CLOSE = b']'`,
//!   `URL_OPEN = b'('`, `URL_CLOSE = b')'`
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser calls these constants; it never hardcodes `[` or `(`.

pub mod markdown_link;

pub use markdown_link::MarkdownLink;
