use std::borrow::Cow;

use crate::parsing::span::Span;

/// Rewrites one discovered link, given its text and url.
///
/// Called once per link in left-to-right order. Must not rely on any other
/// ordering and should be free of side effects.
pub type LinkReplacer<'r> = dyn Fn(&str, &str) -> String + 'r;

/// A top-level `[text](url)` link found in the input.
///
/// `text` and `url` borrow from the input and exclude their delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link<'a> {
    pub text: &'a str,
    pub url: &'a str,
    /// Byte offset of the opening `[`.
    pub start_index: usize,
    /// Byte offset of the closing `)`.
    pub end_index: usize,
}

impl Link<'_> {
    /// Full span of the link, both delimiters included.
    pub fn span(&self) -> Span {
        Span {
            start: self.start_index,
            end: self.end_index + 1,
        }
    }
}

/// Links discovered by a scan and the (possibly rewritten) input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseResult<'a> {
    pub links: Vec<Link<'a>>,
    /// Borrowed verbatim input when no replacer was given.
    pub replaced_text: Cow<'a, str>,
}

impl ParseResult<'_> {
    /// True if the scan found no links.
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
