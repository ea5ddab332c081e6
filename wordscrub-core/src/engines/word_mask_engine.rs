// wordscrub-core/src/engines/word_mask_engine.rs
//! A `SanitizationEngine` that normalizes whitespace and masks banned words.
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use log::debug;
use strip_ansi_escapes::strip;

use crate::config::SanitizerConfig;
use crate::engine::SanitizationEngine;
use crate::mask_summary::{summarize, MaskSummaryItem};
use crate::sanitizers::compiler::BannedWords;
use crate::sanitizers::masking::mask_banned_words;
use crate::sanitizers::whitespace::collapse_whitespace;

#[derive(Debug, Clone)]
pub struct WordMaskEngine {
    banned: BannedWords,
    config: SanitizerConfig,
}

impl WordMaskEngine {
    pub fn new(config: SanitizerConfig) -> Self {
        let banned = BannedWords::compile(&config.banned_words);
        Self { banned, config }
    }

    fn prepare<'a>(&self, content: &'a str) -> Cow<'a, str> {
        if self.config.strip_ansi {
            let stripped = strip(content.as_bytes());
            Cow::Owned(String::from_utf8_lossy(&stripped).into_owned())
        } else {
            Cow::Borrowed(content)
        }
    }
}

impl SanitizationEngine for WordMaskEngine {
    fn sanitize(&self, content: &str, source_id: &str) -> (String, Vec<MaskSummaryItem>) {
        let prepared = self.prepare(content);
        let normalized = collapse_whitespace(&prepared);
        let (masked, counts) = mask_banned_words(&normalized, &self.banned);
        let summary = summarize(&self.banned, &counts);

        debug!(
            "Sanitized '{}': {} -> {} bytes, {} banned word(s) matched.",
            source_id,
            content.len(),
            masked.len(),
            summary.len()
        );
        (masked, summary)
    }

    fn analyze_for_stats(&self, content: &str, source_id: &str) -> Vec<MaskSummaryItem> {
        let prepared = self.prepare(content);
        let mut counts = vec![0usize; self.banned.len()];
        for token in prepared.split_whitespace() {
            if let Some(position) = self.banned.position(token) {
                counts[position] += 1;
            }
        }
        debug!("Analyzed '{}' for banned words.", source_id);
        summarize(&self.banned, &counts)
    }

    fn compiled_words(&self) -> &BannedWords { &self.banned }
    fn get_config(&self) -> &SanitizerConfig { &self.config }
}
