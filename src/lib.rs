//! # levenshtein-dfa
//!
//! Levenshtein automata compiled into explicit deterministic automata.
//!
//! For a fixed reference string and edit bound `n`, the automata in
//! [`automaton`] recognize every string within Levenshtein distance `n` of
//! the reference, consuming one symbol at a time. [`dfa::determinize`]
//! explores such an automaton into a finite transition table with one
//! wildcard edge per state, standing in for every symbol not listed.
//!
//! Two state representations are provided and cross-checked by [`checker`]:
//! a dense cost row and a sparse active window.
//!
//! ## Example
//!
//! ```rust
//! use levenshtein_dfa::prelude::*;
//!
//! let lev = SparseAutomaton::new("woof".chars(), 1);
//! let dfa = determinize(&lev);
//!
//! let query: Vec<char> = "wolf".chars().collect();
//! assert!(dfa.accepts(&query));
//! assert!(lev.accepts(&query));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod automaton;
pub mod checker;
pub mod dfa;
pub mod distance;
pub mod export;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::automaton::{
        Automaton, DenseAutomaton, DenseState, Label, Representation, SparseAutomaton,
        SparseState, Symbol,
    };
    pub use crate::checker::{
        check_corpus, check_corpus_with, check_pair, CheckSummary, Corpus, EquivalenceError,
    };
    pub use crate::dfa::{determinize, Determinizer, Dfa, StateId, Transition};
    pub use crate::distance::standard_distance;
    pub use crate::export::{to_dot, write_dot, ExportError};

    #[cfg(feature = "serialization")]
    pub use crate::export::{to_json, write_json};
}
