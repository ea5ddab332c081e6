// wordscrub-core/src/lib.rs
//! # wordscrub Core Library
//!
//! `wordscrub-core` holds the platform-independent text sanitization logic:
//! it collapses whitespace runs into single spaces and masks configured
//! banned words with asterisks of equal length.
//!
//! The library is pure and stateless. It performs no I/O during
//! sanitization and keeps no state between calls, so engines and the free
//! functions can be used from any number of threads at once.
//!
//! ## Modules
//!
//! * `config`: Defines `SanitizerConfig`, its YAML loading, validation and merging.
//! * `sanitizers`: Whitespace collapsing, banned-word compilation and token masking.
//! * `engine`: Defines the `SanitizationEngine` trait.
//! * `engines`: Concrete implementations of the `SanitizationEngine` trait.
//! * `mask_summary`: Per-word reporting of masking events.
//! * `headless`: One-shot `sanitize` helpers.
//! * `errors`: The `WordscrubError` type.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordscrub_core::{sanitize, SanitizationEngine, SanitizerConfig, WordMaskEngine};
//!
//! let config = SanitizerConfig::with_banned_words(["mockist", "purist"]);
//!
//! // One-shot.
//! assert_eq!(sanitize("hello    purist", Some(&config)), "hello ******");
//!
//! // Reusable engine with a summary.
//! let engine = WordMaskEngine::new(config);
//! let (output, summary) = engine.sanitize("mockist\tand mockist", "example");
//! assert_eq!(output, "******* and *******");
//! assert_eq!(summary[0].occurrences, 2);
//! ```
//!
//! ## Error Handling
//!
//! Sanitization never fails. Loading and validating configuration returns
//! `anyhow::Result`, with `WordscrubError` describing invalid banned words.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod mask_summary;
pub mod sanitizers;

/// Re-exports the configuration type and helpers.
pub use config::{merge_configs, SanitizerConfig};

/// Re-exports the custom error type.
pub use errors::WordscrubError;

pub use engine::SanitizationEngine;
pub use engines::word_mask_engine::WordMaskEngine;

pub use mask_summary::{merge_summaries, MaskSummaryItem};

/// Re-exports the one-shot entry points.
pub use headless::{sanitize, sanitize_with_summary};

pub use sanitizers::compiler::BannedWords;
pub use sanitizers::masking::{mask_banned_words, MASK_CHAR};
pub use sanitizers::whitespace::collapse_whitespace;
