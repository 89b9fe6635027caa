//! # textsim
//!
//! Multi-method text similarity: edit distance, Jaccard overlap under
//! several tokenizations, and embedding-based cosine similarity, all
//! reporting through one result shape.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install textsim
//! OPENAI_API_KEY=sk-... textsim serve --http-port 6340
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use textsim::prelude::*;
//!
//! assert_eq!(levenshtein("kitten", "sitting"), 3);
//!
//! let report = compare("hello world", "hello there");
//! assert!((report.jaccard.score() - 1.0 / 3.0).abs() < 1e-6);
//!
//! let sides = compare_tokenizations("hello world", "hello universe", 3).unwrap();
//! assert_eq!(sides.word.method(), Method::Word);
//! ```
//!
//! ## Crate Structure
//!
//! - [`textsim-core`](https://docs.rs/textsim-core) - Normalizer, tokenizer, edit distance, Jaccard, cosine
//! - [`textsim-semantic`](https://docs.rs/textsim-semantic) - Embedding providers and the semantic adapter
//! - [`textsim-compare`](https://docs.rs/textsim-compare) - Multi-method comparison reports
//! - [`textsim-api`](https://docs.rs/textsim-api) - REST API
//!
//! ## Failure Model
//!
//! - Invalid parameters (n-gram size 0, vectors of different dimension) return [`Error`]
//! - Degenerate inputs (empty strings or sets, zero vectors) score by fixed rules
//! - Embedding provider failures are logged once and score 0.0 in composite reports

// Re-export core types
pub use textsim_core::{
    cosine, cosine_similarity, fuzzy_score, fuzzy_similarity, jaccard_score, jaccard_sets,
    levenshtein, normalize, set_similarity, tokenize, word_jaccard,
    Cosine, Error, Method, Result, SetSimilarity, SimilarityResult, TokenSet, Tokenization,
    Vector, DEFAULT_NGRAM_SIZE,
};

// Re-export semantic similarity
pub use textsim_semantic::{
    Diagnostic, DiagnosticSink, EmbeddingProvider, HashingProvider, MemorySink, OpenAiProvider,
    ProviderConfig, ProviderError, SemanticOutcome, SemanticSimilarity, TracingSink,
};

// Re-export comparison facade
pub use textsim_compare::{
    compare, compare_full, compare_full_detailed, compare_tokenizations, exact_match,
    overlap_ratio, FullComparison, ScoreReport, StringComparison, TokenizationComparison,
};

// Re-export API
pub use textsim_api::RestApi;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        compare, compare_full, compare_tokenizations, cosine_similarity, exact_match,
        fuzzy_score, jaccard_score, levenshtein, overlap_ratio, tokenize,
        Error, Method, Result, SemanticSimilarity, SimilarityResult, TokenSet, Tokenization,
    };
}

/// SIMD-optimized vector operations
pub mod simd {
    pub use textsim_core::simd::{dot_product_simd, norm_simd};
}
