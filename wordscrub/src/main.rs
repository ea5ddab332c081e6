// wordscrub/src/main.rs
//! wordscrub entry point.

use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, info};

use wordscrub::cli::Cli;
use wordscrub::commands::wordscrub::{WordscrubOptions, build_config, run_wordscrub_opts};
use wordscrub::logger;
use wordscrub_core::WordMaskEngine;

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);
    info!("wordscrub started. Version: {}", env!("CARGO_PKG_VERSION"));

    let config = build_config(args.config.as_deref(), &args.ban, args.strip_ansi)?;
    let engine = WordMaskEngine::new(config);

    run_wordscrub_opts(
        &engine,
        WordscrubOptions {
            input_file: args.input_file,
            output_path: args.output,
            line_buffered: args.line_buffered,
            summary: args.summary,
            json_stdout: args.json_stdout,
            quiet: args.quiet,
        },
    )
}
