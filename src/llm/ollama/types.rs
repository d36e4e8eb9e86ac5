//! Ollama-specific request and response types
//!
//! These types map directly to the Ollama HTTP API schema.

use serde::{Deserialize, Serialize};

use crate::llm::core::config::GenerationConfig;

/// Body of `POST /api/generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaGenerateRequest {
    /// Model tag, e.g. `llama3.2:1b`
    pub model: String,
    /// User prompt
    pub prompt: String,
    /// Always false: the relay waits for the whole reply
    pub stream: bool,
    /// System prompt
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    /// Sampling options
    pub options: GenerationConfig,
}

/// Body returned by a non-streaming `POST /api/generate`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaGenerateResponse {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body returned by `GET /api/tags`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OllamaTagsResponse {
    #[serde(default)]
    pub models: Vec<OllamaModelTag>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaModelTag {
    pub name: String,
}
