//! # textsim Compare
//!
//! Multi-method comparison reports built on `textsim-core` and
//! `textsim-semantic`.
//!
//! | Function                   | Report                      |
//! |----------------------------|-----------------------------|
//! | [`compare`]                | fuzzy + word Jaccard        |
//! | [`compare_tokenizations`]  | char / word / n-gram Jaccard|
//! | [`compare_full`]           | fuzzy, Jaccard, semantic    |
//! | [`exact_match`]            | 0 or 1                      |
//! | [`overlap_ratio`]          | lexical overlap in [0, 1]   |
//!
//! Every report is built fresh per call; nothing is cached.

pub mod compare;
pub mod report;

pub use compare::{
    compare, compare_full, compare_full_detailed, compare_tokenizations, exact_match,
    overlap_ratio,
};
pub use report::{FullComparison, ScoreReport, StringComparison, TokenizationComparison};
