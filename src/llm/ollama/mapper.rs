//! Mapping between abstraction types and Ollama-specific types

use crate::llm::core::types::{GenerateRequest, GenerateResult};

use super::types::{OllamaGenerateRequest, OllamaGenerateResponse};

/// Text used when the server omits the `response` field
pub const MISSING_RESPONSE_TEXT: &str = "No response from AI";

/// Convert our abstraction request to Ollama's request format
pub fn to_ollama_request(model: &str, request: GenerateRequest) -> OllamaGenerateRequest {
    OllamaGenerateRequest {
        model: model.to_string(),
        prompt: request.prompt,
        stream: false,
        system: request.system,
        options: request.config,
    }
}

/// Convert Ollama's reply to our abstraction result
pub fn from_ollama_response(response: OllamaGenerateResponse) -> GenerateResult {
    GenerateResult {
        text: response
            .response
            .unwrap_or_else(|| MISSING_RESPONSE_TEXT.to_string()),
        done: response.done,
    }
}
