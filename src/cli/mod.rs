//! CLI interface for levenshtein-dfa
//!
//! Thin wrapper over the library: compile a DFA, run the equivalence check,
//! or test queries against a reference.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, OutputFormat};
