//! Sparse Levenshtein automaton: only the in-budget positions of the row.

use smallvec::SmallVec;

use super::{distinct_symbols, Automaton, Label, Symbol};

/// Active window of a Levenshtein row.
///
/// `indices` is strictly increasing, `values[k]` is the cost at
/// `indices[k]`, and every value is `<= max_distance`. Positions over budget
/// are dropped rather than clamped. An empty window is the dead state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SparseState {
    indices: SmallVec<[usize; 8]>,
    values: SmallVec<[usize; 8]>,
}

impl SparseState {
    /// Reference positions in the window.
    #[inline(always)]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Costs aligned with [`indices`](Self::indices).
    #[inline(always)]
    pub fn values(&self) -> &[usize] {
        &self.values
    }

    /// Check if the window is empty (dead state)
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Get the number of positions in the window
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Iterate over `(index, cost)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    #[inline(always)]
    fn push(&mut self, index: usize, cost: usize) {
        debug_assert!(self.indices.last().is_none_or(|&last| last < index));
        self.indices.push(index);
        self.values.push(cost);
    }
}

/// Levenshtein automaton over the active window.
///
/// A step touches only the positions still within budget, so its cost is
/// bounded by `2n + 1` rather than by the reference length.
///
/// # Examples
///
/// ```rust
/// use levenshtein_dfa::automaton::{Automaton, SparseAutomaton};
///
/// let lev = SparseAutomaton::new("woof".chars(), 1);
/// let state = "wolf".chars().fold(lev.start(), |s, c| lev.step(&s, &c));
/// assert!(lev.is_match(&state));
/// ```
#[derive(Debug, Clone)]
pub struct SparseAutomaton<T> {
    reference: Vec<T>,
    max_distance: usize,
}

impl<T: Symbol> SparseAutomaton<T> {
    /// Create an automaton for `reference` with edit bound `max_distance`.
    pub fn new<I: IntoIterator<Item = T>>(reference: I, max_distance: usize) -> Self {
        Self {
            reference: reference.into_iter().collect(),
            max_distance,
        }
    }
}

impl<T: Symbol> Automaton for SparseAutomaton<T> {
    type Symbol = T;
    type State = SparseState;

    fn reference(&self) -> &[T] {
        &self.reference
    }

    fn max_distance(&self) -> usize {
        self.max_distance
    }

    fn start(&self) -> SparseState {
        let end = self.max_distance.min(self.reference.len());
        SparseState {
            indices: (0..=end).collect(),
            values: (0..=end).collect(),
        }
    }

    fn step_label(&self, state: &SparseState, label: Label<&T>) -> SparseState {
        let n = self.max_distance;
        let mut next = SparseState {
            indices: SmallVec::new(),
            values: SmallVec::new(),
        };

        if let (Some(&0), Some(&cost)) = (state.indices.first(), state.values.first()) {
            if cost < n {
                next.push(0, cost + 1);
            }
        }

        // Ascending order matters: the insertion relaxation reads the
        // position just written to `next`.
        for (j, (i, cost)) in state.iter().enumerate() {
            let Some(reference_symbol) = self.reference.get(i) else {
                break;
            };

            let mut val = cost + label.substitution_cost(reference_symbol);
            if next.indices.last() == Some(&i) {
                if let Some(&left) = next.values.last() {
                    val = val.min(left + 1);
                }
            }
            if state.indices.get(j + 1) == Some(&(i + 1)) {
                val = val.min(state.values[j + 1] + 1);
            }

            if val <= n {
                next.push(i + 1, val);
            }
        }

        next
    }

    fn is_match(&self, state: &SparseState) -> bool {
        state.indices.last() == Some(&self.reference.len())
    }

    fn can_match(&self, state: &SparseState) -> bool {
        !state.is_empty()
    }

    fn transitions(&self, state: &SparseState) -> Vec<T> {
        distinct_symbols(&self.reference, state.indices.iter().copied())
    }
}
