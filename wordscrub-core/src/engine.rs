// wordscrub-core/src/engine.rs
//! Defines the core SanitizationEngine trait.
//!
//! The trait gives the CLI (and any other caller) one interface over the
//! concrete engines, so a prepared engine can be passed around as
//! `&dyn SanitizationEngine` and reused for many inputs.
//!
//! License: MIT OR APACHE 2.0

use crate::config::SanitizerConfig;
use crate::mask_summary::MaskSummaryItem;
use crate::sanitizers::compiler::BannedWords;

/// A trait that defines the core functionality of a sanitization engine.
///
/// Implementations must be pure: no call may observe or change state left
/// behind by another call.
pub trait SanitizationEngine: Send + Sync {
    /// Performs full sanitization on the provided content.
    ///
    /// Returns the sanitized text and a summary of masked words.
    ///
    /// # Arguments
    /// * `content` - The input string to sanitize.
    /// * `source_id` - The name or identifier of the source being processed, used for logging.
    fn sanitize(&self, content: &str, source_id: &str) -> (String, Vec<MaskSummaryItem>);

    /// Counts banned-word occurrences without producing sanitized output.
    fn analyze_for_stats(&self, content: &str, source_id: &str) -> Vec<MaskSummaryItem>;

    /// Returns the compiled banned-word table.
    fn compiled_words(&self) -> &BannedWords;

    /// Returns a reference to the engine's configuration.
    fn get_config(&self) -> &SanitizerConfig;
}
