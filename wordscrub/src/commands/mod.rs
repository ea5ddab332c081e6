// wordscrub/src/commands/mod.rs
pub mod wordscrub;
