//! OpenAI-compatible HTTP embedding provider

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::provider::EmbeddingProvider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [&'a str],
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingDatum>,
}

#[derive(Deserialize)]
struct EmbeddingDatum {
    embedding: Vec<f32>,
    #[serde(default)]
    index: Option<usize>,
}

/// Calls `POST {base_url}/embeddings` with bearer auth
#[derive(Clone)]
pub struct OpenAiProvider {
    client: reqwest::Client,
    config: ProviderConfig,
    api_key: String,
}

impl OpenAiProvider {
    /// Build a provider; fails if no API key is configured
    pub fn new(config: ProviderConfig) -> Result<Self, ProviderError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ProviderError::Config("missing API key".to_string()))?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ProviderError::Config(e.to_string()))?;

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }
}

impl std::fmt::Debug for OpenAiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiProvider")
            .field("config", &self.config)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiProvider {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn embed(&self, inputs: &[&str]) -> Result<Vec<Vec<f32>>, ProviderError> {
        let url = self.config.embeddings_url();
        debug!(model = %self.config.model, inputs = inputs.len(), %url, "requesting embeddings");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&EmbeddingRequest {
                model: &self.config.model,
                input: inputs,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        parse_embeddings(&body)
    }
}

/// Decode an embeddings response body into vectors ordered by `index`.
///
/// Entries without an index keep their position in `data`.
pub(crate) fn parse_embeddings(body: &[u8]) -> Result<Vec<Vec<f32>>, ProviderError> {
    let response: EmbeddingResponse =
        serde_json::from_slice(body).map_err(|e| ProviderError::Malformed(e.to_string()))?;

    let mut data = response.data;
    if data.iter().all(|d| d.index.is_some()) {
        data.sort_by_key(|d| d.index);
    }

    data.into_iter()
        .map(|d| {
            if d.embedding.is_empty() {
                Err(ProviderError::Malformed("empty embedding vector".to_string()))
            } else if d.embedding.iter().any(|x| !x.is_finite()) {
                Err(ProviderError::Malformed("non-finite embedding component".to_string()))
            } else {
                Ok(d.embedding)
            }
        })
        .collect()
}
