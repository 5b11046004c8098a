/// Inline markdown link `[text](url)` with owned delimiter constants.
///
/// Both groups nest lexically: every open of the same kind deepens the
/// group, so `[a[b]c](u)` has the text `a[b]c`.
pub struct MarkdownLink;

impl MarkdownLink {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
}
