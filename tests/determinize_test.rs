//! Compiled DFAs agree with the automata they were built from.

use levenshtein_dfa::prelude::*;

const QUERIES: &[&str] = &[
    "", "w", "wo", "woo", "woof", "wolf", "woofs", "oof", "wof", "fwoo", "foow", "xxxxxxxxxxxx",
    "woofwoofwoof", "banana", "f", "wooooooof",
];

#[test]
fn test_woof_with_large_bound_terminates() {
    let lev = SparseAutomaton::new("woof".chars(), 10);
    let dfa = determinize(&lev);

    assert_eq!(dfa.start(), 0);
    assert!(dfa.state_count() > 0);
    for query in QUERIES {
        let symbols: Vec<char> = query.chars().collect();
        assert_eq!(
            dfa.accepts(&symbols),
            lev.accepts(&symbols),
            "query {:?}",
            query
        );
    }
    // A disjoint query is max(4, len) edits away from "woof"
    let long: Vec<char> = "zzzzzzzzzz".chars().collect();
    assert!(dfa.accepts(&long));
    let too_long: Vec<char> = "zzzzzzzzzzz".chars().collect();
    assert!(!dfa.accepts(&too_long));
}

#[test]
fn test_dfa_matches_direct_stepping() {
    for reference in ["woof", "banana", "", "aaaa"] {
        for n in 0..=3 {
            let sparse = SparseAutomaton::new(reference.chars(), n);
            let dense = DenseAutomaton::new(reference.chars(), n);
            let sparse_dfa = determinize(&sparse);
            let dense_dfa = determinize(&dense);

            for query in QUERIES {
                let symbols: Vec<char> = query.chars().collect();
                let expected = standard_distance(reference, query) <= n;
                assert_eq!(sparse.accepts(&symbols), expected, "{:?}/{}/{:?}", reference, n, query);
                assert_eq!(sparse_dfa.accepts(&symbols), expected, "{:?}/{}/{:?}", reference, n, query);
                assert_eq!(dense_dfa.accepts(&symbols), expected, "{:?}/{}/{:?}", reference, n, query);
            }
        }
    }
}

#[test]
fn test_dense_and_sparse_dfas_have_same_size() {
    // Dense rows and sparse windows are in one-to-one correspondence
    for reference in ["woof", "banana", "abcabc"] {
        for n in 0..=2 {
            let dense = determinize(&DenseAutomaton::new(reference.chars(), n));
            let sparse = determinize(&SparseAutomaton::new(reference.chars(), n));
            assert_eq!(dense.state_count(), sparse.state_count());
            assert_eq!(dense.matching().len(), sparse.matching().len());
            assert_eq!(dense.transitions().len(), sparse.transitions().len());
        }
    }
}

#[test]
fn test_determinization_is_reproducible() {
    let lev = SparseAutomaton::new("banana".chars(), 2);
    assert_eq!(determinize(&lev), determinize(&lev));
}

#[test]
fn test_explicit_edges_use_reference_symbols() {
    let dfa = determinize(&SparseAutomaton::new("woof".chars(), 1));
    for transition in dfa.transitions() {
        if let Label::Literal(c) = transition.label {
            assert!("woof".contains(c));
        }
        assert!(transition.source < dfa.state_count());
        assert!(transition.target < dfa.state_count());
    }
}

#[test]
fn test_independent_runs_in_parallel() {
    let handles: Vec<_> = ["woof", "banana", "cabana", "foobar"]
        .into_iter()
        .map(|reference| {
            std::thread::spawn(move || {
                let lev = SparseAutomaton::new(reference.chars(), 2);
                (determinize(&lev), lev)
            })
        })
        .collect();

    for handle in handles {
        let (dfa, lev) = handle.join().unwrap();
        let query: Vec<char> = lev.reference().to_vec();
        assert!(dfa.accepts(&query));
    }
}

#[test]
fn test_dot_export_of_compiled_dfa() {
    let dfa = determinize(&SparseAutomaton::new("woof".chars(), 1));
    let dot = to_dot(&dfa, "G").unwrap();
    assert!(dot.starts_with("digraph G {\n"));
    assert!(dot.ends_with("}\n"));
    assert_eq!(
        dot.lines().filter(|l| l.contains("->")).count(),
        dfa.transitions().len()
    );
    assert_eq!(
        dot.lines().filter(|l| l.ends_with("[style=filled]")).count(),
        dfa.matching().len()
    );
    assert!(dot.contains("0 -> 1 [label=\" 'w' \"]"));
}
