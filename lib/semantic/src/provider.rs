//! The external embedding provider contract

use crate::error::ProviderError;
use async_trait::async_trait;

/// Turns text into fixed-dimension vectors.
///
/// Implementations return one vector per input, in input order. The
/// dimension is fixed for a given model.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Model identifier sent with each request
    fn model(&self) -> &str;

    /// Embed all inputs in a single request
    async fn embed(&self, inputs: &[&str]) -> Result<Vec<Vec<f32>>, ProviderError>;
}
