//! Uniform result shape shared by every similarity method

use serde::{Deserialize, Serialize};

/// The algorithm that produced a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Fuzzy,
    Jaccard,
    Char,
    Word,
    Ngram,
}

/// Overlap between two token sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetSimilarity {
    pub score: f32,
    /// Shared tokens in sorted order
    pub matches: Vec<String>,
    pub intersection: usize,
    pub union: usize,
}

/// A score plus whatever details its method produces.
///
/// Edit-distance results carry only `distance`; set-based results carry
/// `matches`, `intersection` and `union`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "lowercase")]
pub enum SimilarityResult {
    Fuzzy { score: f32, distance: usize },
    Jaccard(SetSimilarity),
    Char(SetSimilarity),
    Word(SetSimilarity),
    Ngram(SetSimilarity),
}

impl SimilarityResult {
    #[inline]
    pub fn score(&self) -> f32 {
        match self {
            SimilarityResult::Fuzzy { score, .. } => *score,
            SimilarityResult::Jaccard(s)
            | SimilarityResult::Char(s)
            | SimilarityResult::Word(s)
            | SimilarityResult::Ngram(s) => s.score,
        }
    }

    pub fn method(&self) -> Method {
        match self {
            SimilarityResult::Fuzzy { .. } => Method::Fuzzy,
            SimilarityResult::Jaccard(_) => Method::Jaccard,
            SimilarityResult::Char(_) => Method::Char,
            SimilarityResult::Word(_) => Method::Word,
            SimilarityResult::Ngram(_) => Method::Ngram,
        }
    }

    /// Edit distance, for fuzzy results only
    pub fn distance(&self) -> Option<usize> {
        match self {
            SimilarityResult::Fuzzy { distance, .. } => Some(*distance),
            _ => None,
        }
    }

    /// Set overlap details, for set-based results only
    pub fn overlap(&self) -> Option<&SetSimilarity> {
        match self {
            SimilarityResult::Fuzzy { .. } => None,
            SimilarityResult::Jaccard(s)
            | SimilarityResult::Char(s)
            | SimilarityResult::Word(s)
            | SimilarityResult::Ngram(s) => Some(s),
        }
    }
}
