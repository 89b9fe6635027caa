//! Set-similarity engine

use crate::error::Result;
use crate::result::{SetSimilarity, SimilarityResult};
use crate::text::{tokenize, TokenSet, Tokenization};

/// Intersection, union and Jaccard index of two token sets.
///
/// Two empty sets are vacuously identical (1.0); one empty set against a
/// non-empty one scores 0.0.
pub fn set_similarity(a: &TokenSet, b: &TokenSet) -> SetSimilarity {
    let matches: Vec<String> = a.intersection(b).map(str::to_owned).collect();
    let intersection = matches.len();
    let union = a.union_len(b);

    let score = if union == 0 {
        1.0
    } else {
        intersection as f32 / union as f32
    };

    SetSimilarity {
        score,
        matches,
        intersection,
        union,
    }
}

/// Jaccard result over already-tokenized sets
pub fn jaccard_sets(a: &TokenSet, b: &TokenSet) -> SimilarityResult {
    SimilarityResult::Jaccard(set_similarity(a, b))
}

/// Tokenize both strings with the same strategy and compare the sets.
///
/// The result is tagged with the strategy (`char`, `word` or `ngram`).
///
/// ```
/// use textsim_core::{jaccard_score, Tokenization};
///
/// let result = jaccard_score("hello world", "hello there", Tokenization::Word).unwrap();
/// assert_eq!(result.overlap().unwrap().matches, vec!["hello"]);
/// ```
pub fn jaccard_score(a: &str, b: &str, strategy: Tokenization) -> Result<SimilarityResult> {
    let overlap = set_similarity(&tokenize(a, strategy)?, &tokenize(b, strategy)?);

    Ok(match strategy {
        Tokenization::Character => SimilarityResult::Char(overlap),
        Tokenization::Word => SimilarityResult::Word(overlap),
        Tokenization::NGram(_) => SimilarityResult::Ngram(overlap),
    })
}

/// Word-level Jaccard, which has no parameters that can be invalid
pub fn word_jaccard(a: &str, b: &str) -> SimilarityResult {
    SimilarityResult::Word(set_similarity(&TokenSet::words(a), &TokenSet::words(b)))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn intersection_never_exceeds_union(a in "[a-e ]{0,30}", b in "[a-e ]{0,30}") {
            for strategy in [Tokenization::Character, Tokenization::Word, Tokenization::NGram(2)] {
                let result = jaccard_score(&a, &b, strategy).unwrap();
                let overlap = result.overlap().unwrap();
                prop_assert!(overlap.intersection <= overlap.union);
                prop_assert_eq!(overlap.matches.len(), overlap.intersection);
                if overlap.union > 0 {
                    let expected = overlap.intersection as f32 / overlap.union as f32;
                    prop_assert!((overlap.score - expected).abs() < 1e-6);
                }
            }
        }

        #[test]
        fn jaccard_is_symmetric(a in "[a-z ]{0,30}", b in "[a-z ]{0,30}") {
            let ab = jaccard_score(&a, &b, Tokenization::Word).unwrap();
            let ba = jaccard_score(&b, &a, Tokenization::Word).unwrap();
            prop_assert_eq!(ab, ba);
        }
    }
}
