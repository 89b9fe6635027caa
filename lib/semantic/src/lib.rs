//! # textsim Semantic
//!
//! Embedding-based semantic similarity.
//!
//! An [`EmbeddingProvider`] turns both strings into vectors in one batched
//! call; [`SemanticSimilarity`] compares them with cosine similarity. When the
//! provider fails, the adapter records one [`Diagnostic`] on its
//! [`DiagnosticSink`] and reports [`SemanticOutcome::Unavailable`], which
//! reads as a neutral 0.0.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use textsim_semantic::{HashingProvider, SemanticSimilarity};
//!
//! # async fn run() {
//! let adapter = SemanticSimilarity::new(Arc::new(HashingProvider::default()));
//! let score = adapter.similarity("the sky is blue", "the sky is azure").await;
//! assert!(score > 0.0);
//! # }
//! ```
//!
//! ## Providers
//!
//! - [`OpenAiProvider`] - `POST /embeddings` on any OpenAI-compatible API
//! - [`HashingProvider`] - deterministic, offline feature hashing

pub mod adapter;
pub mod config;
pub mod error;
pub mod hashing;
pub mod openai;
pub mod provider;
pub mod sink;

pub use adapter::{SemanticOutcome, SemanticSimilarity};
pub use config::{ProviderConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::ProviderError;
pub use hashing::{HashingProvider, DEFAULT_HASHING_DIM};
pub use openai::OpenAiProvider;
pub use provider::EmbeddingProvider;
pub use sink::{Diagnostic, DiagnosticSink, MemorySink, TracingSink};
