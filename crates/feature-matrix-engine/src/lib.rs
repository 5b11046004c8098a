pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use parsing::{Link, ParseResult, find_links, parse_markdown_links, replace_links};
pub use render::LinkFormat;
