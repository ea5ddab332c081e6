// wordscrub/src/lib.rs
//! # wordscrub CLI Application
//!
//! Command-line front end over `wordscrub-core`: reads text from a file or
//! stdin, sanitizes it line by line, and writes the result to a file or
//! stdout.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
