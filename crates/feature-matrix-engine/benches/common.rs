// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_comment_text(size: usize) -> String {
    let base = "Works with [KittenMod](https://example.org/mods/kitten) since v2, see [notes (old)](https://wiki.example/Page_(x)) and (this aside).\n";
    base.repeat(size)
}

/// Unclosed openers that force a rescan from every position.
#[allow(dead_code)]
pub fn generate_unclosed_brackets(size: usize) -> String {
    let mut content = "[".repeat(size);
    content.push_str("[tail](end)");
    content
}
