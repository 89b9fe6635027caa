//! Edit-distance engine
//!
//! Levenshtein distance over Unicode scalar values, with unit cost for
//! insertion, deletion and substitution.

use crate::result::SimilarityResult;

/// Levenshtein distance between `a` and `b`.
///
/// Fills the full `(|a|+1) x (|b|+1)` table, so time and space are both
/// `O(|a| * |b|)`.
///
/// ```
/// use textsim_core::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (rows, cols) = (a.len() + 1, b.len() + 1);

    // Row-major table; cell (i, j) lives at i * cols + j
    let mut table = vec![0usize; rows * cols];
    for i in 0..rows {
        table[i * cols] = i;
    }
    for j in 0..cols {
        table[j] = j;
    }

    for i in 1..rows {
        for j in 1..cols {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let substitution = table[(i - 1) * cols + (j - 1)] + cost;
            let deletion = table[(i - 1) * cols + j] + 1;
            let insertion = table[i * cols + (j - 1)] + 1;
            table[i * cols + j] = substitution.min(deletion).min(insertion);
        }
    }

    table[rows * cols - 1]
}

/// `1 - distance / max(|a|, |b|)` on the raw strings, in [0.0, 1.0].
///
/// Two empty strings are identical and score 1.0.
#[inline]
pub fn fuzzy_score(a: &str, b: &str) -> f32 {
    fuzzy_from_distance(a, b, levenshtein(a, b))
}

/// Fuzzy score with the edit distance attached
pub fn fuzzy_similarity(a: &str, b: &str) -> SimilarityResult {
    let distance = levenshtein(a, b);
    SimilarityResult::Fuzzy {
        score: fuzzy_from_distance(a, b, distance),
        distance,
    }
}

fn fuzzy_from_distance(a: &str, b: &str, distance: usize) -> f32 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - distance as f32 / max_len as f32
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn distance_is_symmetric(a in ".{0,24}", b in ".{0,24}") {
            prop_assert_eq!(levenshtein(&a, &b), levenshtein(&b, &a));
        }

        #[test]
        fn distance_to_self_is_zero(a in ".{0,32}") {
            prop_assert_eq!(levenshtein(&a, &a), 0);
            prop_assert_eq!(fuzzy_score(&a, &a), 1.0);
        }

        #[test]
        fn fuzzy_score_is_bounded(a in ".{0,24}", b in ".{0,24}") {
            let score = fuzzy_score(&a, &b);
            prop_assert!((0.0..=1.0).contains(&score));
        }

        #[test]
        fn distance_bounded_by_longer_length(a in "[a-z]{0,20}", b in "[a-z]{0,20}") {
            let longer = a.chars().count().max(b.chars().count());
            prop_assert!(levenshtein(&a, &b) <= longer);
        }
    }
}
