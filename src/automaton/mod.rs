//! Levenshtein automata over an opaque symbol alphabet.
//!
//! Two independently derived representations live here:
//!
//! - [`DenseAutomaton`]: the state is the full edit-distance row, one
//!   saturated cost per prefix of the reference.
//! - [`SparseAutomaton`]: the state keeps only the positions whose cost is
//!   still within the edit bound (the "active window").
//!
//! Both implement [`Automaton`], so the determinizer and the equivalence
//! checker are written once against the trait.
//!
//! Costs beyond the bound are clamped to `max_distance + 1`. The automata
//! therefore answer "within `n`?" but cannot report exact distances above `n`.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

use rustc_hash::FxHashSet;

pub mod dense;
pub mod sparse;

pub use self::dense::{DenseAutomaton, DenseState};
pub use self::sparse::{SparseAutomaton, SparseState};

/// An input unit the automata can compare.
///
/// Symbols are opaque: only equality matters. There is no case folding or
/// normalization, each symbol costs exactly one edit.
pub trait Symbol: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Symbol for T {}

/// A transition label: either a concrete symbol or the wildcard.
///
/// The wildcard stands for "any symbol without an explicit edge from this
/// state". It never equals a reference symbol, so stepping with it always
/// pays a substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Label<T> {
    /// A specific symbol.
    Literal(T),
    /// Any symbol not listed explicitly.
    Wildcard,
}

impl<T> Label<T> {
    /// Borrow the label's symbol.
    #[inline]
    pub fn as_ref(&self) -> Label<&T> {
        match self {
            Label::Literal(symbol) => Label::Literal(symbol),
            Label::Wildcard => Label::Wildcard,
        }
    }

    /// Check if this is the wildcard label
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Label::Wildcard)
    }

    /// The literal symbol, if any.
    pub fn literal(&self) -> Option<&T> {
        match self {
            Label::Literal(symbol) => Some(symbol),
            Label::Wildcard => None,
        }
    }
}

impl<T: PartialEq> Label<&T> {
    /// Edit cost of aligning this label with `reference_symbol`.
    #[inline(always)]
    pub(crate) fn substitution_cost(&self, reference_symbol: &T) -> usize {
        match self {
            Label::Literal(symbol) if *symbol == reference_symbol => 0,
            _ => 1,
        }
    }
}

/// Common capability contract of the Levenshtein automata.
///
/// States are immutable values: [`step_label`](Automaton::step_label)
/// returns a new state and never touches its input. Two states with equal
/// content are the same automaton state, which is what lets the determinizer
/// memoize on them.
pub trait Automaton {
    /// Alphabet of the reference string and of queries.
    type Symbol: Symbol;

    /// Automaton state.
    type State: Clone + Eq + Hash + Debug;

    /// The reference string this automaton matches against.
    fn reference(&self) -> &[Self::Symbol];

    /// Maximum edit distance `n`.
    fn max_distance(&self) -> usize;

    /// State before any query symbol has been consumed.
    fn start(&self) -> Self::State;

    /// Consume one label.
    fn step_label(&self, state: &Self::State, label: Label<&Self::Symbol>) -> Self::State;

    /// Consume one query symbol.
    #[inline]
    fn step(&self, state: &Self::State, symbol: &Self::Symbol) -> Self::State {
        self.step_label(state, Label::Literal(symbol))
    }

    /// Whether the query consumed so far is within `max_distance` of the reference.
    fn is_match(&self, state: &Self::State) -> bool;

    /// Whether some continuation of the query could still match.
    ///
    /// Once this is `false` it stays `false` for every successor.
    fn can_match(&self, state: &Self::State) -> bool;

    /// Symbols whose step may differ from the wildcard's.
    ///
    /// Distinct reference symbols at in-budget positions, in order of first
    /// occurrence in the reference. Every other symbol steps exactly like
    /// [`Label::Wildcard`].
    fn transitions(&self, state: &Self::State) -> Vec<Self::Symbol>;

    /// Replay `input` from the start state and report whether it matches.
    fn accepts<'a, I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = &'a Self::Symbol>,
        Self::Symbol: 'a,
    {
        let mut state = self.start();
        for symbol in input {
            if !self.can_match(&state) {
                return false;
            }
            state = self.step(&state, symbol);
        }
        self.is_match(&state)
    }
}

/// Distinct reference symbols at `positions`, first occurrence first.
///
/// `positions` must be increasing; positions at or past the end of the
/// reference carry no symbol and are skipped.
pub(crate) fn distinct_symbols<T, I>(reference: &[T], positions: I) -> Vec<T>
where
    T: Symbol,
    I: IntoIterator<Item = usize>,
{
    let mut seen = FxHashSet::default();
    let mut symbols = Vec::new();
    for i in positions {
        let Some(symbol) = reference.get(i) else {
            break;
        };
        if seen.insert(symbol) {
            symbols.push(symbol.clone());
        }
    }
    symbols
}

/// Which automaton representation to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Representation {
    /// Full cost row per state.
    Dense,
    /// Active window of in-budget positions.
    #[default]
    Sparse,
}

impl Representation {
    /// Get a human-readable name for this representation
    pub fn name(&self) -> &'static str {
        match self {
            Representation::Dense => "dense",
            Representation::Sparse => "sparse",
        }
    }
}

impl Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
