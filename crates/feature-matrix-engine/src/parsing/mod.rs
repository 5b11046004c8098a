pub mod inline;
pub mod span;

pub use inline::{Link, LinkReplacer, ParseResult, find_links, parse_markdown_links, replace_links};
pub use span::Span;
