//! Determinization: exhaustively explore an automaton into a [`Dfa`].
//!
//! The alphabet is conceptually infinite, but from any state only the
//! symbols returned by [`Automaton::transitions`] can behave differently
//! from the wildcard. Exploring those plus one wildcard edge per state,
//! and memoizing on state content, visits every reachable state exactly once.
//!
//! Exploration uses an explicit FIFO work list instead of recursion, so
//! stack depth does not grow with the number of states. Ids are handed out
//! when a state is first seen, breadth-first from the start state (id 0).

use std::collections::VecDeque;

use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::{Dfa, StateId, Transition};
use crate::automaton::{Automaton, Label};

/// Id of the start state in every determinized DFA.
pub const START: StateId = 0;

/// Explorer for a single determinization run.
///
/// Owns the table of discovered states and the next id. One explorer per
/// run: independent runs share nothing and may execute in parallel.
///
/// # Examples
///
/// ```rust
/// use levenshtein_dfa::automaton::SparseAutomaton;
/// use levenshtein_dfa::dfa::Determinizer;
///
/// let lev = SparseAutomaton::new("woof".chars(), 1);
/// let dfa = Determinizer::new(&lev).run();
///
/// let query: Vec<char> = "wolf".chars().collect();
/// assert!(dfa.accepts(&query));
/// ```
pub struct Determinizer<'a, A: Automaton> {
    automaton: &'a A,
    ids: FxHashMap<A::State, StateId>,
    pending: VecDeque<(StateId, A::State)>,
    matching: Vec<StateId>,
    transitions: Vec<Transition<A::Symbol>>,
}

impl<'a, A: Automaton> Determinizer<'a, A> {
    /// Create an explorer for `automaton`, with its start state as id 0.
    pub fn new(automaton: &'a A) -> Self {
        let mut determinizer = Self {
            automaton,
            ids: FxHashMap::default(),
            pending: VecDeque::new(),
            matching: Vec::new(),
            transitions: Vec::new(),
        };
        determinizer.explore(automaton.start());
        determinizer
    }

    /// Number of states discovered so far
    pub fn state_count(&self) -> usize {
        self.ids.len()
    }

    /// Intern `state`, returning its id.
    ///
    /// A state seen before keeps its id. A new state gets the next id, has its
    /// match status recorded, and is queued for expansion.
    fn explore(&mut self, state: A::State) -> StateId {
        if let Some(&id) = self.ids.get(&state) {
            return id;
        }

        let id = self.ids.len();
        if self.automaton.is_match(&state) {
            self.matching.push(id);
        }
        trace!("discovered state {}: {:?}", id, state);
        self.ids.insert(state.clone(), id);
        self.pending.push_back((id, state));
        id
    }

    fn expand(&mut self, id: StateId, state: &A::State) {
        let labels = self
            .automaton
            .transitions(state)
            .into_iter()
            .map(Label::Literal)
            .chain(std::iter::once(Label::Wildcard));

        for label in labels {
            let next = self.automaton.step_label(state, label.as_ref());
            let target = self.explore(next);
            self.transitions.push(Transition::new(id, target, label));
        }
    }

    /// Explore everything reachable from the start state and build the DFA.
    pub fn run(mut self) -> Dfa<A::Symbol> {
        while let Some((id, state)) = self.pending.pop_front() {
            self.expand(id, &state);
        }

        debug!(
            "determinized automaton (max_distance={}, reference length={}): {} states, {} matching, {} transitions",
            self.automaton.max_distance(),
            self.automaton.reference().len(),
            self.ids.len(),
            self.matching.len(),
            self.transitions.len()
        );

        Dfa::from_parts(self.ids.len(), START, self.matching, self.transitions)
    }
}

/// Compile `automaton` into an explicit DFA.
pub fn determinize<A: Automaton>(automaton: &A) -> Dfa<A::Symbol> {
    Determinizer::new(automaton).run()
}
