//! Semantic-similarity adapter
//!
//! Embeds both strings with one provider call and compares the vectors by
//! cosine. Provider failures never escape: they are reported to the sink and
//! turned into [`SemanticOutcome::Unavailable`].

use crate::error::ProviderError;
use crate::provider::EmbeddingProvider;
use crate::sink::{Diagnostic, DiagnosticSink, TracingSink};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use textsim_core::cosine_similarity;

/// Result of one semantic measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SemanticOutcome {
    Measured { score: f32 },
    Unavailable { reason: String },
}

impl SemanticOutcome {
    /// Score with `Unavailable` coerced to the neutral 0.0
    #[inline]
    pub fn score(&self) -> f32 {
        match self {
            SemanticOutcome::Measured { score } => *score,
            SemanticOutcome::Unavailable { .. } => 0.0,
        }
    }

    #[inline]
    pub fn is_measured(&self) -> bool {
        matches!(self, SemanticOutcome::Measured { .. })
    }
}

/// Embedding-backed similarity with an injected diagnostic sink
#[derive(Clone)]
pub struct SemanticSimilarity {
    provider: Arc<dyn EmbeddingProvider>,
    sink: Arc<dyn DiagnosticSink>,
}

impl SemanticSimilarity {
    /// Adapter that reports failures through `tracing`
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            provider,
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the diagnostic sink
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    /// Measure similarity, keeping failures visible as `Unavailable`
    pub async fn measure(&self, a: &str, b: &str) -> SemanticOutcome {
        match self.try_measure(a, b).await {
            Ok(score) => SemanticOutcome::Measured { score },
            Err(error) => {
                let reason = error.to_string();
                self.sink.record(&Diagnostic {
                    model: self.provider.model().to_string(),
                    error,
                });
                SemanticOutcome::Unavailable { reason }
            }
        }
    }

    /// Cosine similarity of the two embeddings in [-1, 1], or 0.0 when the
    /// provider fails
    pub async fn similarity(&self, a: &str, b: &str) -> f32 {
        self.measure(a, b).await.score()
    }

    async fn try_measure(&self, a: &str, b: &str) -> Result<f32, ProviderError> {
        let vectors = self.provider.embed(&[a, b]).await?;
        let [first, second]: [Vec<f32>; 2] = vectors.try_into().map_err(|v: Vec<Vec<f32>>| {
            ProviderError::CountMismatch {
                expected: 2,
                actual: v.len(),
            }
        })?;

        cosine_similarity(&first, &second).map_err(|e| ProviderError::Malformed(e.to_string()))
    }
}
