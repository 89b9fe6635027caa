//! Report types returned by the comparison functions

use serde::{Deserialize, Serialize};
use textsim_core::SimilarityResult;
use textsim_semantic::SemanticOutcome;

/// Fuzzy and word-level Jaccard side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringComparison {
    pub fuzzy: SimilarityResult,
    pub jaccard: SimilarityResult,
}

/// Jaccard under each tokenization strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenizationComparison {
    pub char: SimilarityResult,
    pub word: SimilarityResult,
    pub ngram: SimilarityResult,
}

/// Scalar scores from all three families.
///
/// `semantic` is 0.0 when the embedding provider failed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub fuzzy: f32,
    pub jaccard: f32,
    pub semantic: f32,
}

/// Like [`ScoreReport`] but keeps the semantic failure visible
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullComparison {
    pub fuzzy: SimilarityResult,
    pub jaccard: SimilarityResult,
    pub semantic: SemanticOutcome,
}

impl From<&FullComparison> for ScoreReport {
    fn from(full: &FullComparison) -> Self {
        Self {
            fuzzy: full.fuzzy.score(),
            jaccard: full.jaccard.score(),
            semantic: full.semantic.score(),
        }
    }
}
