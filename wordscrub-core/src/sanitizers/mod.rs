//! Text transformation passes used by the engines.
//!
//! `whitespace` collapses whitespace runs, `compiler` turns a configured
//! banned-word list into a lookup structure, and `masking` walks tokens and
//! replaces the banned ones with asterisks. Each pass is a pure function of
//! its arguments.

pub mod compiler;
pub mod masking;
pub mod whitespace;
