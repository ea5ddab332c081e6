// wordscrub/src/commands/wordscrub.rs
//! The sanitize operation behind the `wordscrub` binary.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use wordscrub_core::{MaskSummaryItem, SanitizationEngine, SanitizerConfig, merge_configs, merge_summaries};

use crate::ui::summary;

/// Options for a single `wordscrub` run.
#[derive(Debug, Default)]
pub struct WordscrubOptions {
    pub input_file: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub line_buffered: bool,
    pub summary: bool,
    pub json_stdout: bool,
    pub quiet: bool,
}

/// Combines the optional config file with words and flags given on the command line.
pub fn build_config(config_path: Option<&Path>, ban: &[String], strip_ansi: bool) -> Result<SanitizerConfig> {
    let base = match config_path {
        Some(path) => SanitizerConfig::load_from_file(path)?,
        None => SanitizerConfig::default(),
    };

    let cli_config = SanitizerConfig {
        banned_words: ban.to_vec(),
        strip_ansi,
    };
    cli_config.validate().context("Invalid --ban value")?;

    let config = merge_configs(base, Some(cli_config));
    debug!("Using {} banned words, strip_ansi={}.", config.banned_words.len(), config.strip_ansi);
    Ok(config)
}

/// The main operation runner for the wordscrub CLI.
pub fn run_wordscrub_opts(engine: &dyn SanitizationEngine, opts: WordscrubOptions) -> Result<()> {
    info!("Starting wordscrub operation.");

    let mut reader = open_input(opts.input_file.as_deref())?;

    if opts.json_stdout {
        let mask_summary = analyze_stream(engine, &mut reader)?;
        let json = serde_json::to_string_pretty(&mask_summary).context("Failed to serialize mask summary")?;
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        writeln!(writer, "{}", json)?;
        info!("wordscrub operation completed.");
        return Ok(());
    }

    let mut writer = open_output(opts.output_path.as_deref())?;
    let mask_summary = sanitize_stream(engine, &mut reader, &mut writer, opts.line_buffered)?;

    if opts.summary && !opts.quiet {
        info!("Displaying mask summary.");
        let stderr = io::stderr();
        let supports_color = stderr.is_terminal();
        summary::print_summary(&mask_summary, &mut stderr.lock(), supports_color)?;
    }

    info!("wordscrub operation completed.");
    Ok(())
}

/// Sanitizes `reader` line by line into `writer`.
///
/// Line endings are copied through unchanged, so whitespace normalization
/// never joins two lines. With `flush_each_line`, output is flushed after
/// every line so the tool can sit in a live pipe.
pub fn sanitize_stream<R: BufRead, W: Write>(
    engine: &dyn SanitizationEngine,
    reader: &mut R,
    writer: &mut W,
    flush_each_line: bool,
) -> Result<Vec<MaskSummaryItem>> {
    let mut total = Vec::new();
    let mut line = String::new();
    let mut line_number = 0usize;

    loop {
        line.clear();
        let read = reader.read_line(&mut line).context("Failed to read input")?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let (content, ending) = split_line_ending(&line);
        let (sanitized, line_summary) = engine.sanitize(content, &format!("line {}", line_number));
        writer.write_all(sanitized.as_bytes()).context("Failed to write output")?;
        writer.write_all(ending.as_bytes()).context("Failed to write output")?;
        if flush_each_line {
            writer.flush().context("Failed to flush output")?;
        }
        merge_summaries(&mut total, line_summary, engine.compiled_words());
    }

    writer.flush().context("Failed to flush output")?;
    debug!("Processed {} lines.", line_number);
    Ok(total)
}

/// Counts banned words in `reader` without producing output.
pub fn analyze_stream<R: BufRead>(engine: &dyn SanitizationEngine, reader: &mut R) -> Result<Vec<MaskSummaryItem>> {
    let mut total = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("Failed to read input")?;
        let line_summary = engine.analyze_for_stats(&line, &format!("line {}", index + 1));
        merge_summaries(&mut total, line_summary, engine.compiled_words());
    }
    Ok(total)
}

fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, "\r\n")
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, "\n")
    } else {
        (line, "")
    }
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            info!("Reading input from file: {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            info!("Reading input from stdin...");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            info!("Writing sanitized content to file: {}", path.display());
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => {
            info!("Writing sanitized content to stdout.");
            Ok(Box::new(io::stdout().lock()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;
    use wordscrub_core::WordMaskEngine;

    #[test]
    fn test_sanitize_stream_keeps_line_structure() {
        let engine = WordMaskEngine::new(SanitizerConfig::with_banned_words(["purist"]));
        let mut reader = io::Cursor::new("hello   purist\r\n\tindented  line\nlast purist");
        let mut out = Vec::new();
        let summary = sanitize_stream(&engine, &mut reader, &mut out, false).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "hello ******\r\n indented line\nlast ******");
        assert_eq!(summary, vec![MaskSummaryItem { word: "purist".to_string(), occurrences: 2 }]);
    }

    #[test]
    fn test_analyze_stream_counts_across_lines() {
        let engine = WordMaskEngine::new(SanitizerConfig::with_banned_words(["mockist", "purist"]));
        let mut reader = io::Cursor::new("purist\nmockist purist\n");
        let summary = analyze_stream(&engine, &mut reader).unwrap();
        assert_eq!(summary[0], MaskSummaryItem { word: "mockist".to_string(), occurrences: 1 });
        assert_eq!(summary[1], MaskSummaryItem { word: "purist".to_string(), occurrences: 2 });
    }

    #[test]
    fn test_build_config_merges_cli_words() {
        let config = build_config(None, &["mockist".to_string(), "purist".to_string()], true).unwrap();
        assert_eq!(config.banned_words, vec!["mockist", "purist"]);
        assert!(config.strip_ansi);
    }

    #[test]
    fn test_build_config_rejects_blank_ban() {
        assert!(build_config(None, &["".to_string()], false).is_err());
    }
}
