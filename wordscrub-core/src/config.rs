//! Configuration management for `wordscrub-core`.
//!
//! This module defines the `SanitizerConfig` record consumed by the engines,
//! handles YAML (de)serialization of it, and provides the validation and
//! merging helpers used by the CLI when a config file and command-line
//! words are combined.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::WordscrubError;

/// Options for a sanitization run.
///
/// An absent config and `SanitizerConfig::default()` behave the same: no
/// word is masked and only whitespace is normalized.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq, Hash)]
#[serde(default, deny_unknown_fields)]
pub struct SanitizerConfig {
    /// Literal words to mask. Matching is case-sensitive and whole-token.
    #[serde(alias = "bannedWords")]
    pub banned_words: Vec<String>,
    /// Remove ANSI escape sequences before normalizing.
    pub strip_ansi: bool,
}

impl SanitizerConfig {
    /// Builds a config masking the given words.
    pub fn with_banned_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            banned_words: words.into_iter().map(Into::into).collect(),
            strip_ansi: false,
        }
    }

    /// Loads a sanitizer configuration from a YAML file and validates it.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading sanitizer config from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: SanitizerConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Config file {} is invalid", path.display()))?;
        info!(
            "Loaded {} banned words from file {}.",
            config.banned_words.len(),
            path.display()
        );

        Ok(config)
    }

    /// Rejects banned words that could never match a token.
    ///
    /// A token never contains whitespace and is never empty, so such entries
    /// are almost certainly mistakes in the config. Every offending entry is
    /// reported at once.
    pub fn validate(&self) -> Result<(), WordscrubError> {
        let errors: Vec<WordscrubError> = self
            .banned_words
            .iter()
            .enumerate()
            .filter_map(|(index, word)| {
                if word.is_empty() {
                    Some(WordscrubError::InvalidBannedWord(index, "word is empty".to_string()))
                } else if word.chars().any(char::is_whitespace) {
                    Some(WordscrubError::InvalidBannedWord(
                        index,
                        format!("'{}' contains whitespace and can never match a single token", word),
                    ))
                } else {
                    None
                }
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            let details = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<String>>()
                .join("\n");
            Err(WordscrubError::InvalidConfig(format!(
                "{} invalid banned word(s):\n{}",
                errors.len(),
                details
            )))
        }
    }
}

/// Merges a user configuration on top of a base one.
///
/// User words are appended after the base words; duplicates are dropped and
/// the first occurrence keeps its position. `strip_ansi` is enabled if either
/// side enables it.
pub fn merge_configs(base: SanitizerConfig, user: Option<SanitizerConfig>) -> SanitizerConfig {
    debug!("merge_configs called. Base banned words: {}", base.banned_words.len());

    let Some(user) = user else {
        return base;
    };

    debug!("User config provided. Merging {} user words.", user.banned_words.len());
    let mut seen: HashSet<String> = HashSet::new();
    let banned_words: Vec<String> = base
        .banned_words
        .into_iter()
        .chain(user.banned_words)
        .filter(|word| seen.insert(word.clone()))
        .collect();

    debug!("Final banned words after merge: {}", banned_words.len());
    SanitizerConfig {
        banned_words,
        strip_ansi: base.strip_ansi || user.strip_ansi,
    }
}
