//! Property-based tests for the Levenshtein automata and their DFAs.

use levenshtein_dfa::checker::check_pair;
use levenshtein_dfa::prelude::*;
use proptest::prelude::*;

// Small alphabet so that queries actually hit reference symbols
fn word_strategy() -> impl Strategy<Value = String> {
    "[abc]{0,8}"
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: dense and sparse agree on is_match and can_match after every prefix
    #[test]
    fn prop_representations_agree(
        reference in word_strategy(),
        query in word_strategy(),
        n in 0usize..=4
    ) {
        let dense = DenseAutomaton::new(reference.chars(), n);
        let sparse = SparseAutomaton::new(reference.chars(), n);
        let query = chars(&query);
        prop_assert_eq!(check_pair(&dense, &sparse, &query), Ok(query.len() + 1));
    }

    /// Property: the automata accept exactly the strings within distance n
    #[test]
    fn prop_accepts_iff_within_distance(
        reference in word_strategy(),
        query in word_strategy(),
        n in 0usize..=4
    ) {
        let expected = standard_distance(&reference, &query) <= n;
        let query = chars(&query);
        prop_assert_eq!(DenseAutomaton::new(reference.chars(), n).accepts(&query), expected);
        prop_assert_eq!(SparseAutomaton::new(reference.chars(), n).accepts(&query), expected);
    }

    /// Property: costs stay saturated and windows stay well formed
    #[test]
    fn prop_state_invariants(
        reference in word_strategy(),
        query in "[abcd]{0,12}",
        n in 0usize..=4
    ) {
        let dense = DenseAutomaton::new(reference.chars(), n);
        let sparse = SparseAutomaton::new(reference.chars(), n);
        let mut d = dense.start();
        let mut s = sparse.start();

        for c in query.chars() {
            d = dense.step(&d, &c);
            s = sparse.step(&s, &c);

            prop_assert_eq!(d.costs().len(), reference.chars().count() + 1);
            prop_assert!(d.costs().iter().all(|&cost| cost <= n + 1));

            prop_assert_eq!(s.indices().len(), s.values().len());
            prop_assert!(s.indices().windows(2).all(|w| w[0] < w[1]));
            prop_assert!(s.values().iter().all(|&cost| cost <= n));
        }
    }

    /// Property: once no match is possible, none ever becomes possible
    #[test]
    fn prop_dead_states_absorb(
        reference in word_strategy(),
        query in "[abcd]{0,12}",
        n in 0usize..=3
    ) {
        let sparse = SparseAutomaton::new(reference.chars(), n);
        let dense = DenseAutomaton::new(reference.chars(), n);
        let mut s = sparse.start();
        let mut d = dense.start();
        let mut dead = false;

        for c in query.chars() {
            s = sparse.step(&s, &c);
            d = dense.step(&d, &c);
            if dead {
                prop_assert!(!sparse.can_match(&s) && !sparse.is_match(&s));
                prop_assert!(!dense.can_match(&d) && !dense.is_match(&d));
            }
            dead = !sparse.can_match(&s);
        }
    }

    /// Property: the compiled DFA agrees with stepping the automaton directly
    #[test]
    fn prop_dfa_agrees_with_automaton(
        reference in word_strategy(),
        queries in prop::collection::vec("[abcd]{0,10}", 1..=10),
        n in 0usize..=3
    ) {
        let lev = SparseAutomaton::new(reference.chars(), n);
        let dfa = determinize(&lev);
        for query in queries {
            let query = chars(&query);
            prop_assert_eq!(dfa.accepts(&query), lev.accepts(&query));
        }
    }

    /// Property: with n = 0 only the reference itself is accepted
    #[test]
    fn prop_zero_bound_is_exact_match(
        reference in word_strategy(),
        query in word_strategy()
    ) {
        let lev = SparseAutomaton::new(reference.chars(), 0);
        prop_assert_eq!(lev.accepts(&chars(&query)), reference == query);
    }
}
