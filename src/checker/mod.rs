//! Equivalence checking between the dense and sparse automata.
//!
//! Both representations are derived independently from the same edit
//! distance recurrence. Replaying a shared corpus through both and comparing
//! their predicates after every symbol catches a defect in either one.
//!
//! # Example
//!
//! ```rust
//! use levenshtein_dfa::checker::{check_corpus, Corpus};
//!
//! let summary = check_corpus(&Corpus::default()).unwrap();
//! assert!(summary.prefixes > 0);
//! ```

use log::{debug, trace};

use crate::automaton::{Automaton, DenseAutomaton, SparseAutomaton};

pub mod corpus;
pub mod error;

pub use self::corpus::Corpus;
pub use self::error::{EquivalenceError, Mismatch, Predicate, Result};

/// First point where two automata stopped agreeing on a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Divergence {
    /// Symbols consumed when the predicates diverged (0 = start state)
    pub prefix_len: usize,
    /// Predicate that diverged
    pub predicate: Predicate,
    /// First automaton's verdict
    pub left: bool,
    /// Second automaton's verdict
    pub right: bool,
}

/// Totals for a successful corpus check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    /// `(reference, max_distance)` pairs checked
    pub automata: usize,
    /// Queries replayed, over all pairs
    pub queries: usize,
    /// Prefixes compared, including the start state of every replay
    pub prefixes: usize,
}

fn compare<A, B>(
    left: &A,
    left_state: &A::State,
    right: &B,
    right_state: &B::State,
    prefix_len: usize,
) -> std::result::Result<(), Divergence>
where
    A: Automaton,
    B: Automaton<Symbol = A::Symbol>,
{
    let checks = [
        (
            Predicate::IsMatch,
            left.is_match(left_state),
            right.is_match(right_state),
        ),
        (
            Predicate::CanMatch,
            left.can_match(left_state),
            right.can_match(right_state),
        ),
    ];

    for (predicate, l, r) in checks {
        if l != r {
            return Err(Divergence {
                prefix_len,
                predicate,
                left: l,
                right: r,
            });
        }
    }
    Ok(())
}

/// Replay `query` through two automata side by side.
///
/// Compares `is_match` and `can_match` at the start state and after every
/// symbol. Returns the number of prefixes compared, or the first divergence.
pub fn check_pair<A, B>(
    left: &A,
    right: &B,
    query: &[A::Symbol],
) -> std::result::Result<usize, Divergence>
where
    A: Automaton,
    B: Automaton<Symbol = A::Symbol>,
{
    let mut left_state = left.start();
    let mut right_state = right.start();
    compare(left, &left_state, right, &right_state, 0)?;

    for (i, symbol) in query.iter().enumerate() {
        left_state = left.step(&left_state, symbol);
        right_state = right.step(&right_state, symbol);
        compare(left, &left_state, right, &right_state, i + 1)?;
    }

    Ok(query.len() + 1)
}

/// Check the dense and sparse automata against each other on `corpus`.
///
/// Stops at the first disagreement.
pub fn check_corpus(corpus: &Corpus) -> Result<CheckSummary> {
    check_corpus_with(
        corpus,
        |reference, max_distance| DenseAutomaton::new(reference.chars(), max_distance),
        |reference, max_distance| SparseAutomaton::new(reference.chars(), max_distance),
    )
}

/// Check two automaton constructors against each other on `corpus`.
///
/// `make_dense` and `make_sparse` build one automaton per
/// `(reference, max_distance)` pair. Their verdicts are reported in the
/// `dense` and `sparse` fields of a [`Mismatch`]. Stops at the first
/// disagreement.
pub fn check_corpus_with<A, B, FA, FB>(
    corpus: &Corpus,
    make_dense: FA,
    make_sparse: FB,
) -> Result<CheckSummary>
where
    A: Automaton<Symbol = char>,
    B: Automaton<Symbol = char>,
    FA: Fn(&str, usize) -> A,
    FB: Fn(&str, usize) -> B,
{
    let mut summary = CheckSummary::default();

    for reference in &corpus.references {
        for &max_distance in &corpus.max_distances {
            let dense = make_dense(reference, max_distance);
            let sparse = make_sparse(reference, max_distance);
            summary.automata += 1;

            for query in &corpus.queries {
                let symbols: Vec<char> = query.chars().collect();
                match check_pair(&dense, &sparse, &symbols) {
                    Ok(prefixes) => {
                        trace!(
                            "{:?} vs {:?} (max_distance={}): {} prefixes agree",
                            reference,
                            query,
                            max_distance,
                            prefixes
                        );
                        summary.queries += 1;
                        summary.prefixes += prefixes;
                    }
                    Err(divergence) => {
                        return Err(EquivalenceError::Mismatch(Box::new(Mismatch {
                            reference: reference.clone(),
                            max_distance,
                            query: query.clone(),
                            prefix_len: divergence.prefix_len,
                            predicate: divergence.predicate,
                            dense: divergence.left,
                            sparse: divergence.right,
                        })));
                    }
                }
            }
        }
    }

    debug!(
        "equivalence check passed: {} automata, {} queries, {} prefixes",
        summary.automata, summary.queries, summary.prefixes
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::Label;

    /// Sparse automaton that forgets the end of the reference.
    struct NeverMatches(SparseAutomaton<char>);

    impl Automaton for NeverMatches {
        type Symbol = char;
        type State = <SparseAutomaton<char> as Automaton>::State;

        fn reference(&self) -> &[char] {
            self.0.reference()
        }
        fn max_distance(&self) -> usize {
            self.0.max_distance()
        }
        fn start(&self) -> Self::State {
            self.0.start()
        }
        fn step_label(&self, state: &Self::State, label: Label<&char>) -> Self::State {
            self.0.step_label(state, label)
        }
        fn is_match(&self, _state: &Self::State) -> bool {
            false
        }
        fn can_match(&self, state: &Self::State) -> bool {
            self.0.can_match(state)
        }
        fn transitions(&self, state: &Self::State) -> Vec<char> {
            self.0.transitions(state)
        }
    }

    #[test]
    fn test_banana_cabana_agrees_on_every_prefix() {
        let dense = DenseAutomaton::new("banana".chars(), 2);
        let sparse = SparseAutomaton::new("banana".chars(), 2);
        let query: Vec<char> = "cabana".chars().collect();
        assert_eq!(check_pair(&dense, &sparse, &query), Ok(7));
        assert!(dense.accepts(&query));
    }

    #[test]
    fn test_divergence_reports_prefix() {
        let dense = DenseAutomaton::new("ab".chars(), 0);
        let broken = NeverMatches(SparseAutomaton::new("ab".chars(), 0));
        let query: Vec<char> = "ab".chars().collect();
        assert_eq!(
            check_pair(&dense, &broken, &query),
            Err(Divergence {
                prefix_len: 2,
                predicate: Predicate::IsMatch,
                left: true,
                right: false,
            })
        );
    }

    #[test]
    fn test_default_corpus_passes() {
        let summary = check_corpus(&Corpus::default()).unwrap();
        assert_eq!(summary.automata, 7 * 5);
        assert_eq!(summary.queries, 7 * 7 * 5);
    }

    #[test]
    fn test_corpus_reports_first_mismatch() {
        let corpus = Corpus {
            references: vec!["ab".into()],
            queries: vec!["".into(), "ab".into(), "abc".into()],
            max_distances: vec![0],
        };
        let err = check_corpus_with(
            &corpus,
            |reference, max_distance| DenseAutomaton::new(reference.chars(), max_distance),
            |reference, max_distance| {
                NeverMatches(SparseAutomaton::new(reference.chars(), max_distance))
            },
        )
        .unwrap_err();

        let EquivalenceError::Mismatch(mismatch) = err;
        assert_eq!(
            *mismatch,
            Mismatch {
                reference: "ab".into(),
                max_distance: 0,
                query: "ab".into(),
                prefix_len: 2,
                predicate: Predicate::IsMatch,
                dense: true,
                sparse: false,
            }
        );
    }

    #[test]
    fn test_corpus_with_matching_constructors() {
        let corpus = Corpus::symmetric(["ab", "ba"], [0, 1]);
        let summary = check_corpus_with(
            &corpus,
            |reference, max_distance| SparseAutomaton::new(reference.chars(), max_distance),
            |reference, max_distance| SparseAutomaton::new(reference.chars(), max_distance),
        )
        .unwrap();
        assert_eq!(summary, check_corpus(&corpus).unwrap());
    }

    #[test]
    fn test_mismatch_message_names_the_case() {
        let err = EquivalenceError::Mismatch(Box::new(Mismatch {
            reference: "banana".into(),
            max_distance: 2,
            query: "cabana".into(),
            prefix_len: 3,
            predicate: Predicate::CanMatch,
            dense: true,
            sparse: false,
        }));
        let message = err.to_string();
        assert!(message.contains("can_match"));
        assert!(message.contains("\"banana\""));
        assert!(message.contains("after 3 symbol(s)"));
    }
}
