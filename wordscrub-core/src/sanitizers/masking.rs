//! Token masking.
//!
//! License: MIT OR APACHE 2.0

use crate::mask_summary::log_mask_action_debug;
use crate::sanitizers::compiler::BannedWords;

/// Character used to hide a banned token.
pub const MASK_CHAR: char = '*';

/// Replaces every banned token in `text` with `MASK_CHAR`, one per character.
///
/// Tokens are maximal runs of non-whitespace. Whitespace between them is
/// copied through untouched, so this pass may run on raw or normalized text.
/// Returns the masked text and, for each compiled word, how many tokens were
/// masked (indexed like `BannedWords::words`).
pub fn mask_banned_words(text: &str, banned: &BannedWords) -> (String, Vec<usize>) {
    let mut counts = vec![0usize; banned.len()];
    if banned.is_empty() {
        return (text.to_string(), counts);
    }

    let mut masked = String::with_capacity(text.len());
    let mut rest = text;

    while !rest.is_empty() {
        let token_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (token, tail) = rest.split_at(token_end);

        match banned.position(token) {
            Some(position) => {
                counts[position] += 1;
                let mask: String = std::iter::repeat(MASK_CHAR).take(token.chars().count()).collect();
                log_mask_action_debug(module_path!(), token, &mask);
                masked.push_str(&mask);
            }
            None => masked.push_str(token),
        }

        let gap_end = tail.find(|c: char| !c.is_whitespace()).unwrap_or(tail.len());
        masked.push_str(&tail[..gap_end]);
        rest = &tail[gap_end..];
    }

    (masked, counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn banned(list: &[&str]) -> BannedWords {
        let words: Vec<String> = list.iter().map(|w| w.to_string()).collect();
        BannedWords::compile(&words)
    }

    #[test]
    fn test_masks_whole_tokens_only() {
        let (masked, counts) = mask_banned_words("mockist mockists premockist mockist", &banned(&["mockist"]));
        assert_eq!(masked, "******* mockists premockist *******");
        assert_eq!(counts, vec![2]);
    }

    #[test]
    fn test_preserves_separators() {
        let (masked, _) = mask_banned_words("\tpurist  x ", &banned(&["purist"]));
        assert_eq!(masked, "\t******  x ");
    }

    #[test]
    fn test_mask_length_counts_chars_not_bytes() {
        let (masked, counts) = mask_banned_words("ça va", &banned(&["ça"]));
        assert_eq!(masked, "** va");
        assert_eq!(counts, vec![1]);
    }

    #[test]
    fn test_empty_ban_list_is_identity() {
        let (masked, counts) = mask_banned_words("hello  world", &BannedWords::default());
        assert_eq!(masked, "hello  world");
        assert!(counts.is_empty());
    }
}
