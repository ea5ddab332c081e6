// File: wordscrub-core/src/headless.rs

//! One-shot sanitization helpers for callers that do not want to hold an
//! engine. Each call compiles the banned-word list afresh.

use crate::config::SanitizerConfig;
use crate::engine::SanitizationEngine;
use crate::engines::word_mask_engine::WordMaskEngine;
use crate::mask_summary::MaskSummaryItem;
use crate::sanitizers::whitespace::collapse_whitespace;

/// Sanitizes `text`: collapses whitespace runs to one space and masks every
/// token equal to a banned word with `*` of the same length.
///
/// `None` behaves like an empty banned-word list. The function never fails.
///
/// ```rust
/// use wordscrub_core::{sanitize, SanitizerConfig};
///
/// let config = SanitizerConfig::with_banned_words(["mockist", "purist"]);
/// assert_eq!(sanitize("hello   mockist", Some(&config)), "hello *******");
/// assert_eq!(sanitize("hello\t world", None), "hello world");
/// ```
pub fn sanitize(text: &str, config: Option<&SanitizerConfig>) -> String {
    sanitize_with_summary(text, config).0
}

/// Like [`sanitize`], also returning which banned words were masked and how often.
pub fn sanitize_with_summary(
    text: &str,
    config: Option<&SanitizerConfig>,
) -> (String, Vec<MaskSummaryItem>) {
    match config {
        Some(config) => WordMaskEngine::new(config.clone()).sanitize(text, "headless"),
        None => (collapse_whitespace(text), Vec::new()),
    }
}
