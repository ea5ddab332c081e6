//! Whitespace normalization.
//!
//! License: MIT OR APACHE 2.0

/// Replaces every maximal run of whitespace with a single ASCII space.
///
/// Whitespace is anything `char::is_whitespace` accepts, so tabs, newlines
/// and carriage returns are folded in too. Boundary runs are collapsed, not
/// trimmed: `"  hi "` becomes `" hi "`. Empty input stays empty.
///
/// ```rust
/// use wordscrub_core::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("hello \t  world"), "hello world");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars() {
        if c.is_whitespace() {
            if !in_run {
                collapsed.push(' ');
                in_run = true;
            }
        } else {
            collapsed.push(c);
            in_run = false;
        }
    }

    collapsed
}
