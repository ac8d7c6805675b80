//! Explicit deterministic automata compiled from a Levenshtein automaton.
//!
//! A [`Dfa`] is the output boundary of the determinizer: numbered states,
//! a start id, the matching subset, and labeled transitions where
//! [`Label::Wildcard`] covers every symbol without an explicit edge.
//!
//! The DFA is not minimized. States are exactly the distinct automaton
//! states reachable from the start.

use crate::automaton::{Label, Symbol};

pub mod determinize;

pub use self::determinize::{determinize, Determinizer, START};

/// Identifier of a DFA state, assigned in discovery order.
pub type StateId = usize;

/// A labeled edge `source -> target`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Transition<T> {
    /// Source state
    pub source: StateId,
    /// Destination state
    pub target: StateId,
    /// Symbol or wildcard
    pub label: Label<T>,
}

impl<T> Transition<T> {
    /// Create a new transition
    pub fn new(source: StateId, target: StateId, label: Label<T>) -> Self {
        Self {
            source,
            target,
            label,
        }
    }
}

/// Compiled transition table.
///
/// Transitions are kept grouped by source (stable, so per-source discovery
/// order is preserved). Lookups give a literal edge precedence over the
/// wildcard edge of the same source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct Dfa<T> {
    state_count: usize,
    start: StateId,
    matching: Vec<StateId>,
    transitions: Vec<Transition<T>>,
}

impl<T: Symbol> Dfa<T> {
    /// Assemble a DFA from its boundary data.
    ///
    /// `matching` is sorted and deduplicated, `transitions` is stably sorted
    /// by source.
    pub fn from_parts(
        state_count: usize,
        start: StateId,
        mut matching: Vec<StateId>,
        mut transitions: Vec<Transition<T>>,
    ) -> Self {
        matching.sort_unstable();
        matching.dedup();
        transitions.sort_by_key(|t| t.source);
        Self {
            state_count,
            start,
            matching,
            transitions,
        }
    }

    /// Start state id (always the first explored state).
    #[inline]
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Number of states
    #[inline]
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// All state ids.
    pub fn states(&self) -> std::ops::Range<StateId> {
        0..self.state_count
    }

    /// Matching (accepting) state ids, ascending.
    #[inline]
    pub fn matching(&self) -> &[StateId] {
        &self.matching
    }

    /// Check if `state` is accepting
    #[inline]
    pub fn is_match(&self, state: StateId) -> bool {
        self.matching.binary_search(&state).is_ok()
    }

    /// All transitions, grouped by source.
    #[inline]
    pub fn transitions(&self) -> &[Transition<T>] {
        &self.transitions
    }

    /// Outgoing transitions of `state`.
    pub fn transitions_from(&self, state: StateId) -> &[Transition<T>] {
        let lo = self.transitions.partition_point(|t| t.source < state);
        let hi = self.transitions.partition_point(|t| t.source <= state);
        &self.transitions[lo..hi]
    }

    /// Follow `symbol` from `state`.
    ///
    /// Uses the literal edge for `symbol` when one exists, the wildcard edge
    /// otherwise. Returns `None` when the state has neither.
    pub fn next(&self, state: StateId, symbol: &T) -> Option<StateId> {
        let mut fallback = None;
        for transition in self.transitions_from(state) {
            match &transition.label {
                Label::Literal(c) if c == symbol => return Some(transition.target),
                Label::Wildcard => fallback = Some(transition.target),
                Label::Literal(_) => {}
            }
        }
        fallback
    }

    /// Run `input` through the table and report whether it ends in a match.
    pub fn accepts<'a, I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut state = self.start;
        for symbol in input {
            match self.next(state, symbol) {
                Some(target) => state = target,
                None => return false,
            }
        }
        self.is_match(state)
    }
}
