//! # Inline Link Parsing
//!
//! Cursor-based scanning for top-level markdown links `[text](url)`.
//!
//! ## Architecture
//!
//! Two cooperating pieces:
//! - the delimiter matcher finds the close that balances an open, counting
//!   nesting lexically
//! - the link scanner drives a single forward cursor, matching a bracket
//!   group and then the parenthesis group right after it
//!
//! A failed match is never an error. The `[` is treated as text and the scan
//! resumes one byte later.
//!
//! ## Modules
//!
//! - **`types`**: `Link`, `ParseResult`, and the `LinkReplacer` callback type
//! - **`kinds`**: `MarkdownLink` owning its delimiter constants
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`delimiter`**: `match_delimited()` nested-group matcher
//! - **`parser`**: `parse_markdown_links()` main entry point

pub mod cursor;
pub mod delimiter;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{find_links, parse_markdown_links, replace_links};
pub use types::{Link, LinkReplacer, ParseResult};
