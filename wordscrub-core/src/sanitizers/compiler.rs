//! compiler.rs - Turns a configured banned-word list into a lookup table.
//!
//! Compilation happens once per engine. Nothing is cached globally, so every
//! engine owns its table and sanitization stays reentrant.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, warn};
use std::collections::HashMap;

/// A compiled set of banned words.
///
/// Lookups are exact string comparisons. Words keep the position they had in
/// the configuration so summaries can be reported in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BannedWords {
    words: Vec<String>,
    index: HashMap<String, usize>,
}

impl BannedWords {
    /// Compiles a list of banned words.
    ///
    /// Duplicates collapse into their first occurrence. Entries that can never
    /// equal a token (empty, or containing whitespace) are skipped.
    pub fn compile(words: &[String]) -> Self {
        debug!("Starting compilation of {} banned words.", words.len());

        let mut compiled = BannedWords::default();
        for (position, word) in words.iter().enumerate() {
            if !is_maskable(word) {
                warn!(
                    "Skipping banned word #{} because it is empty or contains whitespace.",
                    position
                );
                continue;
            }
            if compiled.index.contains_key(word) {
                debug!("Banned word #{} is a duplicate, ignoring.", position);
                continue;
            }
            compiled.index.insert(word.clone(), compiled.words.len());
            compiled.words.push(word.clone());
        }

        debug!("Finished compiling banned words. Total compiled: {}.", compiled.words.len());
        compiled
    }

    /// Position of `token` in the compiled list, if it is banned.
    pub fn position(&self, token: &str) -> Option<usize> {
        self.index.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.index.contains_key(token)
    }

    /// Compiled words in configuration order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// True if `word` could ever equal a whitespace-delimited token.
pub fn is_maskable(word: &str) -> bool {
    !word.is_empty() && !word.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_compile_dedupes_and_keeps_order() {
        let compiled = BannedWords::compile(&words(&["purist", "mockist", "purist"]));
        assert_eq!(compiled.words(), &["purist".to_string(), "mockist".to_string()]);
        assert_eq!(compiled.position("mockist"), Some(1));
    }

    #[test]
    fn test_compile_skips_unmaskable_entries() {
        let compiled = BannedWords::compile(&words(&["", "two words", "ok"]));
        assert_eq!(compiled.len(), 1);
        assert!(compiled.contains("ok"));
        assert!(!compiled.contains(""));
    }

    #[test]
    fn test_lookup_is_literal_and_case_sensitive() {
        let compiled = BannedWords::compile(&words(&["a.c", "Word"]));
        assert!(compiled.contains("a.c"));
        assert!(!compiled.contains("abc"));
        assert!(!compiled.contains("word"));
    }
}
