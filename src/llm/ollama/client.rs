//! Ollama client implementation

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

use crate::llm::core::{
    error::LlmError,
    provider::LlmProvider,
    types::{GenerateRequest, GenerateResult},
};

use super::mapper::{from_ollama_response, to_ollama_request};
use super::types::{OllamaGenerateResponse, OllamaTagsResponse};

/// Where `ollama serve` listens by default
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Model pulled at startup and used for every chat reply
pub const DEFAULT_MODEL: &str = "llama3.2:1b";

/// Client for a local Ollama server
#[derive(Debug, Clone)]
pub struct OllamaClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL without trailing slash
    base_url: String,
    /// Model tag sent with every generate call
    model: String,
    /// Threshold for generate calls
    generate_timeout: Duration,
    /// Threshold for the tags probe
    health_timeout: Duration,
}

impl OllamaClient {
    /// Create a new Ollama client
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        generate_timeout: Duration,
        health_timeout: Duration,
    ) -> Result<Self, LlmError> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()
            .map_err(|e| LlmError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        let base_url: String = base_url.into();
        Ok(Self {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.into(),
            generate_timeout,
            health_timeout,
        })
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    fn tags_url(&self) -> String {
        format!("{}/api/tags", self.base_url)
    }
}

#[async_trait]
impl LlmProvider for OllamaClient {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResult, LlmError> {
        let ollama_request = to_ollama_request(&self.model, request);
        debug!(model = %self.model, "sending generate request");

        let response = self
            .http_client
            .post(self.generate_url())
            .timeout(self.generate_timeout)
            .json(&ollama_request)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::HttpError {
                status: status.as_u16(),
                body,
            });
        }

        let body: OllamaGenerateResponse = response.json().await?;
        if let Some(error) = &body.error {
            warn!(%error, "ollama reported an error alongside a 200 reply");
        }

        Ok(from_ollama_response(body))
    }

    async fn ping(&self) -> Result<(), LlmError> {
        let response = self
            .http_client
            .get(self.tags_url())
            .timeout(self.health_timeout)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(LlmError::HttpError {
                status: status.as_u16(),
                body: String::new(),
            });
        }

        // Reachable is enough; a missing model only matters for the logs
        if let Ok(tags) = response.json::<OllamaTagsResponse>().await {
            if !tags.models.iter().any(|m| m.name == self.model) {
                debug!(model = %self.model, "model not listed by ollama yet");
            }
        }
        Ok(())
    }
}
