// wordscrub/src/cli.rs
//! Command-line interface definition for `wordscrub`.

use clap::Parser;
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "wordscrub",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Collapse whitespace and mask banned words",
    long_about = "wordscrub reads text, collapses every run of spaces and tabs into a single space, and replaces each word on the ban list with asterisks of the same length. Line breaks are kept; each line is sanitized on its own.",
)]
pub struct Cli {
    /// Read input from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Write output to a file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to a YAML configuration file with `banned_words` and `strip_ansi`.
    #[arg(long = "config", value_name = "FILE", env = "WORDSCRUB_CONFIG")]
    pub config: Option<PathBuf>,

    /// Additional banned words (comma-separated), merged after the config file's.
    #[arg(long = "ban", short = 'b', value_name = "WORD", value_delimiter = ',')]
    pub ban: Vec<String>,

    /// Strip ANSI escape sequences before sanitizing.
    #[arg(long = "strip-ansi")]
    pub strip_ansi: bool,

    /// Process input line by line as it arrives (useful for pipes).
    #[arg(long = "line-buffered")]
    pub line_buffered: bool,

    /// Print a per-word summary of masked tokens to stderr.
    #[arg(long = "summary")]
    pub summary: bool,

    /// Print the mask summary as JSON to stdout instead of the sanitized text.
    #[arg(long = "json-stdout", conflicts_with_all = ["output", "line_buffered"])]
    pub json_stdout: bool,

    /// Suppress all informational and debug messages.
    #[arg(long, short = 'q', conflicts_with = "debug")]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long, short = 'd')]
    pub debug: bool,
}
