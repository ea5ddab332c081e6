// wordscrub/src/ui/summary.rs
//! Human-readable mask summary, written to stderr by the CLI.

use std::io::{self, Write};

use owo_colors::OwoColorize;
use wordscrub_core::MaskSummaryItem;

/// Writes the summary to `writer`, colouring word names when `supports_color` is set.
pub fn print_summary<W: Write>(
    summary: &[MaskSummaryItem],
    writer: &mut W,
    supports_color: bool,
) -> io::Result<()> {
    if summary.is_empty() {
        writeln!(writer, "No banned words found.")?;
        return Ok(());
    }

    if supports_color {
        writeln!(writer, "{}", "Mask Summary:".bold())?;
    } else {
        writeln!(writer, "Mask Summary:")?;
    }

    for item in summary {
        let noun = if item.occurrences == 1 { "occurrence" } else { "occurrences" };
        if supports_color {
            writeln!(writer, "  {} ({} {})", item.word.yellow(), item.occurrences, noun)?;
        } else {
            writeln!(writer, "  {} ({} {})", item.word, item.occurrences, noun)?;
        }
    }

    let total: usize = summary.iter().map(|item| item.occurrences).sum();
    writeln!(writer, "Total masked: {}", total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(summary: &[MaskSummaryItem]) -> String {
        let mut out = Vec::new();
        print_summary(summary, &mut out, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_empty_summary() {
        assert_eq!(render(&[]), "No banned words found.\n");
    }

    #[test]
    fn test_plain_summary() {
        let summary = vec![
            MaskSummaryItem { word: "mockist".to_string(), occurrences: 1 },
            MaskSummaryItem { word: "purist".to_string(), occurrences: 3 },
        ];
        assert_eq!(
            render(&summary),
            "Mask Summary:\n  mockist (1 occurrence)\n  purist (3 occurrences)\nTotal masked: 4\n"
        );
    }
}
