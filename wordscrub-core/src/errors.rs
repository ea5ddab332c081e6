//! errors.rs - Custom error types for the wordscrub-core library.
//!
//! Sanitization itself never fails; these errors belong to the configuration
//! boundary, where a malformed banned-word list is rejected before any engine
//! is built from it.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `wordscrub-core` library.
///
/// `#[non_exhaustive]` so new variants can be added without breaking callers
/// that match on it.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum WordscrubError {
    #[error("Banned word #{0} is invalid: {1}")]
    InvalidBannedWord(usize, String),

    #[error("Invalid sanitizer configuration: {0}")]
    InvalidConfig(String),
}
