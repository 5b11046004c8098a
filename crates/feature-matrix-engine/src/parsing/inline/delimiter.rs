use crate::parsing::span::Span;

use super::cursor::Cursor;

/// A balanced delimiter group found by [`match_delimited`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimited<'a> {
    /// Text strictly between the opening and the matching closing delimiter.
    pub content: &'a str,
    /// Span of `content` in the input.
    pub inner: Span,
    /// Byte offset of the matching closing delimiter.
    pub end_index: usize,
}

/// Finds the close that balances the group opened at `start`.
///
/// The byte at `start` is not checked; the caller must have seen `open`
/// there. Scanning starts at `start` inclusive, every `open` deepens the
/// group and every `close` shallows it, and the close that brings the depth
/// back to zero is the match. Counting is purely lexical.
///
/// Returns `None` when the input ends before the group balances.
pub fn match_delimited(s: &str, start: usize, open: u8, close: u8) -> Option<Delimited<'_>> {
    let mut cur = Cursor::at(s, start);
    let mut depth = 0isize;

    while let Some(b) = cur.bump() {
        if b == open {
            depth += 1;
        } else if b == close {
            depth -= 1;
            if depth == 0 {
                let end_index = cur.pos() - 1;
                let inner = Span {
                    start: start + 1,
                    end: end_index,
                };
                return Some(Delimited {
                    content: inner.slice(s),
                    inner,
                    end_index,
                });
            }
        }
    }

    None
}
