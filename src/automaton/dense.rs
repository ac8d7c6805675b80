//! Dense Levenshtein automaton: one saturated cost per reference prefix.

use smallvec::SmallVec;

use super::{distinct_symbols, Automaton, Label, Symbol};

/// Full edit-distance row.
///
/// Entry `i` is the edit distance between the first `i` reference symbols and
/// the query consumed so far, clamped to `max_distance + 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DenseState {
    costs: SmallVec<[usize; 16]>,
}

impl DenseState {
    /// Saturated costs, `reference.len() + 1` entries.
    #[inline(always)]
    pub fn costs(&self) -> &[usize] {
        &self.costs
    }

    /// Smallest cost in the row.
    #[inline]
    pub fn min_cost(&self) -> usize {
        self.costs.iter().copied().min().unwrap_or(0)
    }
}

/// Levenshtein automaton over the full cost row.
///
/// Each step computes the next row of the classic edit-distance matrix, so a
/// step costs `O(L)` for a reference of length `L`.
///
/// # Examples
///
/// ```rust
/// use levenshtein_dfa::automaton::{Automaton, DenseAutomaton};
///
/// let lev = DenseAutomaton::new("banana".chars(), 2);
/// let query: Vec<char> = "cabana".chars().collect();
/// assert!(lev.accepts(&query));
/// ```
#[derive(Debug, Clone)]
pub struct DenseAutomaton<T> {
    reference: Vec<T>,
    max_distance: usize,
}

impl<T: Symbol> DenseAutomaton<T> {
    /// Create an automaton for `reference` with edit bound `max_distance`.
    pub fn new<I: IntoIterator<Item = T>>(reference: I, max_distance: usize) -> Self {
        Self {
            reference: reference.into_iter().collect(),
            max_distance,
        }
    }

    #[inline(always)]
    fn saturate(&self, cost: usize) -> usize {
        cost.min(self.max_distance.saturating_add(1))
    }
}

impl<T: Symbol> Automaton for DenseAutomaton<T> {
    type Symbol = T;
    type State = DenseState;

    fn reference(&self) -> &[T] {
        &self.reference
    }

    fn max_distance(&self) -> usize {
        self.max_distance
    }

    fn start(&self) -> DenseState {
        DenseState {
            costs: (0..=self.reference.len()).map(|i| self.saturate(i)).collect(),
        }
    }

    fn step_label(&self, state: &DenseState, label: Label<&T>) -> DenseState {
        let prev = &state.costs;
        let mut costs: SmallVec<[usize; 16]> = SmallVec::with_capacity(prev.len());
        costs.push(self.saturate(prev[0] + 1));

        for (i, reference_symbol) in self.reference.iter().enumerate() {
            let substitution = prev[i] + label.substitution_cost(reference_symbol);
            let insertion = costs[i] + 1;
            let deletion = prev[i + 1] + 1;
            costs.push(self.saturate(substitution.min(insertion).min(deletion)));
        }

        DenseState { costs }
    }

    fn is_match(&self, state: &DenseState) -> bool {
        state
            .costs
            .last()
            .is_some_and(|&cost| cost <= self.max_distance)
    }

    fn can_match(&self, state: &DenseState) -> bool {
        state.min_cost() <= self.max_distance
    }

    fn transitions(&self, state: &DenseState) -> Vec<T> {
        let positions = state
            .costs
            .iter()
            .enumerate()
            .filter(|&(_, &cost)| cost <= self.max_distance)
            .map(|(i, _)| i);
        distinct_symbols(&self.reference, positions)
    }
}
