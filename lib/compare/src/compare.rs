//! Stateless composition of the similarity engines

use crate::report::{FullComparison, ScoreReport, StringComparison, TokenizationComparison};
use ahash::AHashSet;
use textsim_core::{fuzzy_similarity, jaccard_score, word_jaccard, Result, Tokenization};
use textsim_semantic::SemanticSimilarity;

/// Fuzzy score plus word-level Jaccard.
///
/// ```
/// use textsim_compare::compare;
///
/// let report = compare("quick brown fox", "quick brown dog");
/// assert!(report.fuzzy.score() > 0.8);
/// assert_eq!(report.jaccard.overlap().unwrap().intersection, 2);
/// ```
pub fn compare(a: &str, b: &str) -> StringComparison {
    StringComparison {
        fuzzy: fuzzy_similarity(a, b),
        jaccard: word_jaccard(a, b),
    }
}

/// Jaccard over characters, words and `n`-grams.
///
/// Fails only when `n` is 0.
pub fn compare_tokenizations(a: &str, b: &str, n: usize) -> Result<TokenizationComparison> {
    Ok(TokenizationComparison {
        char: jaccard_score(a, b, Tokenization::Character)?,
        word: jaccard_score(a, b, Tokenization::Word)?,
        ngram: jaccard_score(a, b, Tokenization::NGram(n))?,
    })
}

/// Fuzzy, word Jaccard and semantic scores as plain numbers.
///
/// A provider failure yields `semantic: 0.0`; the rest of the report is
/// always computed.
pub async fn compare_full(semantic: &SemanticSimilarity, a: &str, b: &str) -> ScoreReport {
    ScoreReport::from(&compare_full_detailed(semantic, a, b).await)
}

/// Full comparison keeping details and the semantic outcome tag
pub async fn compare_full_detailed(
    semantic: &SemanticSimilarity,
    a: &str,
    b: &str,
) -> FullComparison {
    let StringComparison { fuzzy, jaccard } = compare(a, b);
    FullComparison {
        fuzzy,
        jaccard,
        semantic: semantic.measure(a, b).await,
    }
}

/// 1.0 when the strings are equal after trimming surrounding whitespace
#[inline]
pub fn exact_match(expected: &str, actual: &str) -> f32 {
    if expected.trim() == actual.trim() {
        1.0
    } else {
        0.0
    }
}

/// Share of `expected`'s whitespace tokens that also occur in `actual`.
///
/// Tokens are compared verbatim and counted once per occurrence in
/// `expected`, so duplicates count. This is a coarse lexical-overlap
/// heuristic, not BLEU or any other standard metric. Returns 0.0 when
/// `expected` has no tokens.
pub fn overlap_ratio(expected: &str, actual: &str) -> f32 {
    let actual_tokens: AHashSet<&str> = actual.split_whitespace().collect();

    let mut total = 0usize;
    let mut found = 0usize;
    for token in expected.split_whitespace() {
        total += 1;
        if actual_tokens.contains(token) {
            found += 1;
        }
    }

    if total == 0 {
        0.0
    } else {
        found as f32 / total as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use textsim_core::{Error, Method};
    use textsim_semantic::{
        EmbeddingProvider, HashingProvider, MemorySink, ProviderError, SemanticOutcome,
    };

    struct DownProvider;

    #[async_trait::async_trait]
    impl EmbeddingProvider for DownProvider {
        fn model(&self) -> &str {
            "down"
        }

        async fn embed(&self, _inputs: &[&str]) -> std::result::Result<Vec<Vec<f32>>, ProviderError> {
            Err(ProviderError::Status {
                status: 503,
                body: "unavailable".to_string(),
            })
        }
    }

    #[test]
    fn test_compare() {
        let report = compare("hello world", "hello there");
        assert_eq!(report.fuzzy.method(), Method::Fuzzy);
        assert_eq!(report.jaccard.method(), Method::Word);
        assert!((report.jaccard.score() - 1.0 / 3.0).abs() < 1e-6);
        // "world" -> "there" takes 5 edits over 11 chars
        assert_eq!(report.fuzzy.distance(), Some(5));
        assert!((report.fuzzy.score() - 6.0 / 11.0).abs() < 1e-6);
    }

    #[test]
    fn test_compare_tokenizations() {
        let report = compare_tokenizations("hello world", "hello universe", 3).unwrap();
        assert_eq!(report.char.method(), Method::Char);
        assert_eq!(report.word.method(), Method::Word);
        assert_eq!(report.ngram.method(), Method::Ngram);
        assert!((report.word.score() - 1.0 / 3.0).abs() < 1e-6);
        assert!(report.ngram.overlap().unwrap().matches.contains(&"hel".to_string()));
    }

    #[test]
    fn test_compare_tokenizations_rejects_zero() {
        assert_eq!(
            compare_tokenizations("a", "b", 0).unwrap_err(),
            Error::InvalidNgramSize(0)
        );
    }

    #[test]
    fn test_exact_match() {
        assert_eq!(exact_match("hello world", "hello world"), 1.0);
        assert_eq!(exact_match("  hello world\n", "hello world "), 1.0);
        assert_eq!(exact_match("hello world", "hello"), 0.0);
        assert_eq!(exact_match("Hello", "hello"), 0.0);
    }

    #[test]
    fn test_overlap_ratio() {
        assert_eq!(overlap_ratio("the cat sat on the mat", "the cat sat on the mat"), 1.0);
        // "sat" is missing from actual, both "the" occurrences count
        let ratio = overlap_ratio("the cat sat on the mat", "a cat sits on the mat");
        assert!((ratio - 5.0 / 6.0).abs() < 1e-6);
        assert_eq!(overlap_ratio("", "anything"), 0.0);
        assert_eq!(overlap_ratio("   ", "anything"), 0.0);
        assert_eq!(overlap_ratio("word", ""), 0.0);
    }

    #[test]
    fn test_overlap_ratio_counts_duplicates() {
        assert!((overlap_ratio("a a b", "a") - 2.0 / 3.0).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_compare_full_survives_provider_failure() {
        let sink = Arc::new(MemorySink::new());
        let semantic = SemanticSimilarity::new(Arc::new(DownProvider)).with_sink(sink.clone());

        let report = compare_full(&semantic, "hello world", "hello there").await;
        assert_eq!(report.semantic, 0.0);
        assert!((report.jaccard - 1.0 / 3.0).abs() < 1e-6);
        assert!(report.fuzzy > 0.0);
        assert_eq!(sink.len(), 1);
    }

    #[tokio::test]
    async fn test_compare_full_detailed_keeps_tag() {
        let semantic = SemanticSimilarity::new(Arc::new(DownProvider))
            .with_sink(Arc::new(MemorySink::new()));
        let full = compare_full_detailed(&semantic, "a", "b").await;
        assert!(matches!(full.semantic, SemanticOutcome::Unavailable { .. }));

        let semantic = SemanticSimilarity::new(Arc::new(HashingProvider::default()));
        let full = compare_full_detailed(&semantic, "same text", "same text").await;
        assert!(full.semantic.is_measured());
        assert!((ScoreReport::from(&full).semantic - 1.0).abs() < 1e-5);
        assert_eq!(full.fuzzy.score(), 1.0);
    }
}
