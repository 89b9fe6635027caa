//! Deterministic offline embeddings
//!
//! Feature-hashes character trigrams and words into a fixed-size vector.
//! No model or network is involved, so it works without credentials and
//! gives reproducible scores in tests. It captures lexical overlap only.

use crate::error::ProviderError;
use crate::provider::EmbeddingProvider;
use async_trait::async_trait;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use textsim_core::normalize;

/// Default dimension of hashed embeddings
pub const DEFAULT_HASHING_DIM: usize = 256;

const HASHING_MODEL: &str = "hashing-trigram-v1";

#[derive(Debug, Clone)]
pub struct HashingProvider {
    dim: usize,
}

impl Default for HashingProvider {
    fn default() -> Self {
        Self {
            dim: DEFAULT_HASHING_DIM,
        }
    }
}

impl HashingProvider {
    /// Create a provider with the given dimension (at least 1)
    pub fn new(dim: usize) -> Self {
        Self { dim: dim.max(1) }
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Embed one text
    pub fn embed_text(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dim];
        let normalized = normalize(text);

        let padded: Vec<char> = format!("  {}  ", normalized).chars().collect();
        for window in padded.windows(3) {
            let trigram: String = window.iter().collect();
            vector[self.slot(&trigram)] += 1.0;
        }

        // Whole words weigh more than trigrams
        for word in normalized.split_whitespace() {
            vector[self.slot(word)] += 2.0;
        }

        let magnitude = textsim_core::simd::norm_simd(&vector) as f32;
        if magnitude > 0.0 {
            for v in &mut vector {
                *v /= magnitude;
            }
        }
        vector
    }

    fn slot(&self, feature: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        feature.hash(&mut hasher);
        (hasher.finish() as usize) % self.dim
    }
}

#[async_trait]
impl EmbeddingProvider for HashingProvider {
    fn model(&self) -> &str {
        HASHING_MODEL
    }

    async fn embed(&self, inputs: &[&str]) -> Result<Vec<Vec<f32>>, ProviderError> {
        Ok(inputs.iter().map(|text| self.embed_text(text)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textsim_core::cosine_similarity;

    #[test]
    fn test_dimension_and_unit_length() {
        let provider = HashingProvider::new(64);
        let v = provider.embed_text("hello world");
        assert_eq!(v.len(), 64);
        let magnitude: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((magnitude - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_same_text_same_vector() {
        let provider = HashingProvider::default();
        assert_eq!(provider.embed_text("Hello, world"), provider.embed_text("hello world"));
    }

    #[test]
    fn test_related_text_scores_higher() {
        let provider = HashingProvider::default();
        let base = provider.embed_text("prosciutto cotto");
        let near = provider.embed_text("prosciutto crudo");
        let far = provider.embed_text("organic bananas");
        let near_sim = cosine_similarity(&base, &near).unwrap();
        let far_sim = cosine_similarity(&base, &far).unwrap();
        assert!(near_sim > far_sim, "{} <= {}", near_sim, far_sim);
    }

    #[test]
    fn test_zero_dim_is_clamped() {
        assert_eq!(HashingProvider::new(0).dim(), 1);
    }
}
