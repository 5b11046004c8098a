use std::borrow::Cow;

use super::{
    cursor::Cursor,
    delimiter::match_delimited,
    kinds::MarkdownLink,
    types::{Link, LinkReplacer, ParseResult},
};

/// Scans `s` for top-level `[text](url)` links, optionally rewriting them.
///
/// # Scanning
/// A single forward cursor looks for `[`. The bracket group must balance and
/// be followed immediately by a balanced parenthesis group. When any step
/// fails the `[` is treated as plain text and scanning resumes one byte
/// later, so a failed bracket group is rescanned rather than skipped. A
/// confirmed link is skipped entirely.
///
/// # Replacement
/// With a `replacer`, `replaced_text` is `s` with every link span replaced by
/// `replacer(text, url)`. Without one it borrows `s` unchanged.
///
/// Never fails: unbalanced input just yields fewer links.
pub fn parse_markdown_links<'a>(s: &'a str, replacer: Option<&LinkReplacer<'_>>) -> ParseResult<'a> {
    let mut cur = Cursor::new(s);
    let mut links = vec![];
    let mut out = String::new();
    let mut copy_from = 0;

    while !cur.eof() {
        if let Some(link) = try_parse_link(&mut cur) {
            log::trace!(
                "link [{}]({}) at {}..={}",
                link.text,
                link.url,
                link.start_index,
                link.end_index
            );
            if let Some(replace) = replacer {
                out.push_str(&s[copy_from..link.start_index]);
                out.push_str(&replace(link.text, link.url));
                copy_from = link.end_index + 1;
            }
            links.push(link);
            continue;
        }
        cur.bump();
    }

    let replaced_text = match replacer {
        Some(_) => {
            out.push_str(&s[copy_from..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(s),
    };

    ParseResult {
        links,
        replaced_text,
    }
}

/// Finds links without rewriting; `replaced_text` borrows `s`.
pub fn find_links(s: &str) -> ParseResult<'_> {
    parse_markdown_links(s, None)
}

/// Finds links and replaces each with `replacer(text, url)`.
pub fn replace_links<'a, F>(s: &'a str, replacer: F) -> ParseResult<'a>
where
    F: Fn(&str, &str) -> String,
{
    parse_markdown_links(s, Some(&replacer))
}

/// Attempts to parse a link whose `[` is at the current position.
///
/// On success the cursor sits just past the closing `)`. On failure the
/// cursor is left where it was.
fn try_parse_link<'a>(cur: &mut Cursor<'a>) -> Option<Link<'a>> {
    if cur.peek() != Some(MarkdownLink::TEXT_OPEN) {
        return None;
    }

    let start = cur.pos();
    let text = match_delimited(cur.s, start, MarkdownLink::TEXT_OPEN, MarkdownLink::TEXT_CLOSE)?;

    let after_bracket = text.end_index + 1;
    if cur.peek_at(after_bracket) != Some(MarkdownLink::URL_OPEN) {
        return None;
    }

    let url = match_delimited(
        cur.s,
        after_bracket,
        MarkdownLink::URL_OPEN,
        MarkdownLink::URL_CLOSE,
    )?;

    cur.seek(url.end_index + 1);

    Some(Link {
        text: text.content,
        url: url.content,
        start_index: start,
        end_index: url.end_index,
    })
}
