// wordscrub-core/src/mask_summary.rs
//! Reporting types for masking events, plus the debug-logging helpers that
//! keep masked words out of logs unless explicitly allowed.

use lazy_static::lazy_static;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::sanitizers::compiler::BannedWords;

lazy_static! {
    /// Whether masked words may appear in clear in debug logs.
    static ref PII_DEBUG_ALLOWED: bool = {
        std::env::var("WORDSCRUB_ALLOW_DEBUG_PII")
            .map(|s| s.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    };
}

/// How many tokens were masked for one banned word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskSummaryItem {
    pub word: String,
    pub occurrences: usize,
}

/// Builds summary items from per-word counts, in configuration order.
///
/// Words that never matched are left out.
pub fn summarize(banned: &BannedWords, counts: &[usize]) -> Vec<MaskSummaryItem> {
    banned
        .words()
        .iter()
        .zip(counts)
        .filter(|(_, occurrences)| **occurrences > 0)
        .map(|(word, &occurrences)| MaskSummaryItem {
            word: word.clone(),
            occurrences,
        })
        .collect()
}

/// Folds `items` into `total`, adding occurrences for words already present.
///
/// The result is re-ordered to follow `banned`.
pub fn merge_summaries(total: &mut Vec<MaskSummaryItem>, items: Vec<MaskSummaryItem>, banned: &BannedWords) {
    for item in items {
        match total.iter_mut().find(|t| t.word == item.word) {
            Some(existing) => existing.occurrences += item.occurrences,
            None => total.push(item),
        }
    }
    total.sort_by_key(|item| banned.position(&item.word).unwrap_or(usize::MAX));
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    if s.len() <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", s.len())
    }
}

fn get_loggable_content(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        sensitive_content.to_string()
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_mask_action_debug(module_path: &str, original_token: &str, mask: &str) {
    debug!(
        "{} Mask action: Original='{}', Masked='{}'",
        module_path,
        get_loggable_content(original_token),
        mask
    );
}
