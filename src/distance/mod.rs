//! Direct Levenshtein distance computation.
//!
//! Used to verify automata and compiled DFAs: a query is accepted by an
//! automaton with bound `n` exactly when its distance to the reference is
//! at most `n`.

use smallvec::SmallVec;

/// Standard Levenshtein distance between two symbol sequences.
///
/// Space-optimized dynamic programming over two rows.
pub fn standard_distance_slice<T: PartialEq>(source: &[T], target: &[T]) -> usize {
    let m = source.len();
    let n = target.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev_row: SmallVec<[usize; 32]> = (0..=n).collect();
    let mut curr_row: SmallVec<[usize; 32]> = SmallVec::from_elem(0, n + 1);

    for i in 1..=m {
        curr_row[0] = i;

        for j in 1..=n {
            let cost = if source[i - 1] == target[j - 1] { 0 } else { 1 };
            curr_row[j] = (prev_row[j] + 1) // deletion
                .min(curr_row[j - 1] + 1) // insertion
                .min(prev_row[j - 1] + cost); // substitution
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[n]
}

/// Standard Levenshtein distance between two strings, by `char`.
pub fn standard_distance(source: &str, target: &str) -> usize {
    let source_chars: SmallVec<[char; 32]> = source.chars().collect();
    let target_chars: SmallVec<[char; 32]> = target.chars().collect();
    standard_distance_slice(&source_chars, &target_chars)
}
