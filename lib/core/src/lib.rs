//! # textsim Core
//!
//! Pure, synchronous similarity engines for the textsim workspace.
//!
//! - [`normalize`] / [`tokenize`] - lowercase, strip punctuation, split into a [`TokenSet`]
//! - [`levenshtein`] / [`fuzzy_score`] - edit distance and its normalized score
//! - [`set_similarity`] / [`jaccard_score`] - Jaccard overlap of token sets
//! - [`cosine_similarity`] - cosine of two dense vectors
//!
//! Every method reports through [`SimilarityResult`], a tagged enum keyed by
//! [`Method`].
//!
//! ## Example
//!
//! ```rust
//! use textsim_core::{fuzzy_score, jaccard_score, levenshtein, Tokenization};
//!
//! assert_eq!(levenshtein("kitten", "sitting"), 3);
//! assert!((fuzzy_score("hello", "hallo") - 0.8).abs() < 1e-6);
//!
//! let words = jaccard_score("hello world", "hello there", Tokenization::Word).unwrap();
//! assert_eq!(words.overlap().unwrap().intersection, 1);
//! ```
//!
//! All functions are free of shared state and can be called from any thread.

pub mod error;
pub mod jaccard;
pub mod levenshtein;
pub mod result;
pub mod text;
pub mod vector;

/// SIMD kernels backing the vector-similarity engine
///
/// - AVX2/FMA on x86_64
/// - NEON on ARM64/Apple Silicon
pub mod simd;

pub use error::{Error, Result};
pub use jaccard::{jaccard_score, jaccard_sets, set_similarity, word_jaccard};
pub use levenshtein::{fuzzy_score, fuzzy_similarity, levenshtein};
pub use result::{Method, SetSimilarity, SimilarityResult};
pub use text::{normalize, tokenize, TokenSet, Tokenization, DEFAULT_NGRAM_SIZE};
pub use vector::{cosine, cosine_similarity, Cosine, Vector};
