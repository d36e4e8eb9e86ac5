//! Provider trait for inference server implementations

use async_trait::async_trait;
use std::sync::Arc;

use super::{
    error::LlmError,
    types::{GenerateRequest, GenerateResult},
};
use crate::config::AppConfig;
use crate::llm::ollama::OllamaClient;

/// Main interface the relay and health probe use to reach the model server
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Generate a complete (non-streaming) reply for a prompt
    ///
    /// # Errors
    /// `LlmError::HttpError` when the server answers with a non-200 status,
    /// `LlmError::Transport` when it cannot be reached in time.
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResult, LlmError>;

    /// Cheap liveness query; `Ok(())` means the server answered 200
    async fn ping(&self) -> Result<(), LlmError>;
}

/// Create the provider described by the application config
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn create_provider(config: &AppConfig) -> Result<Arc<dyn LlmProvider>, LlmError> {
    let client = OllamaClient::new(
        config.ollama_url.clone(),
        config.model.clone(),
        config.generate_timeout,
        config.health_timeout,
    )?;
    Ok(Arc::new(client))
}
