//! Error types for equivalence checking.

use std::fmt;

use thiserror::Error;

/// The predicate two automata disagreed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// [`Automaton::is_match`](crate::automaton::Automaton::is_match)
    IsMatch,
    /// [`Automaton::can_match`](crate::automaton::Automaton::can_match)
    CanMatch,
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predicate::IsMatch => f.write_str("is_match"),
            Predicate::CanMatch => f.write_str("can_match"),
        }
    }
}

/// A disagreement between the dense and the sparse automaton.
///
/// Carries everything needed to replay the failing case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Reference string of both automata
    pub reference: String,
    /// Edit bound of both automata
    pub max_distance: usize,
    /// Query being replayed
    pub query: String,
    /// Number of query symbols consumed when the verdicts diverged
    pub prefix_len: usize,
    /// Predicate that diverged
    pub predicate: Predicate,
    /// Dense automaton's verdict
    pub dense: bool,
    /// Sparse automaton's verdict
    pub sparse: bool,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} mismatch for reference {:?} (max_distance={}) on query {:?} after {} symbol(s): dense={}, sparse={}",
            self.predicate,
            self.reference,
            self.max_distance,
            self.query,
            self.prefix_len,
            self.dense,
            self.sparse
        )
    }
}

/// Errors that can occur while checking automata for equivalence.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EquivalenceError {
    /// The two representations disagreed on a prefix.
    #[error("{0}")]
    Mismatch(Box<Mismatch>),
}

/// A specialized `Result` type for equivalence checking.
pub type Result<T> = std::result::Result<T, EquivalenceError>;
