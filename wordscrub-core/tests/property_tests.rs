// wordscrub-core/tests/property_tests.rs
//! Randomized properties of `sanitize`.

use proptest::prelude::*;

use wordscrub_core::{sanitize, SanitizerConfig};

proptest! {
    #[test]
    fn prop_masks_any_generated_word(bw in "[a-zA-Z0-9_]{1,24}") {
        let config = SanitizerConfig::with_banned_words([bw.clone()]);
        let expected = format!("hello {}", "*".repeat(bw.len()));
        prop_assert_eq!(sanitize(&format!("hello {}", bw), Some(&config)), expected);
    }

    #[test]
    fn prop_sanitize_is_idempotent(s in "[a-z \t\n]{0,64}") {
        let once = sanitize(&s, None);
        prop_assert_eq!(sanitize(&once, None), once.clone());
        prop_assert!(!once.contains("  "));
        prop_assert!(!once.contains('\t'));
    }

    #[test]
    fn prop_masking_preserves_char_length(words in prop::collection::vec("[a-zé]{1,8}", 1..8)) {
        let text = words.join(" ");
        let config = SanitizerConfig::with_banned_words(words.iter().take(2).cloned());
        let output = sanitize(&text, Some(&config));
        prop_assert_eq!(output.chars().count(), text.chars().count());
    }
}
