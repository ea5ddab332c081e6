// wordscrub/src/logger.rs
//! Logger initialisation for the `wordscrub` binary.
//!
//! All log output goes to stderr so it never mixes with sanitized text on
//! stdout.

use std::io::Write;

use log::LevelFilter;

/// Initialises `env_logger`.
///
/// `RUST_LOG` decides the level unless `level` overrides it. Calling this
/// more than once is harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder
        .target(env_logger::Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args()));
    let _ = builder.try_init();
}
