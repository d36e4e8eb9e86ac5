//! Core types for the LLM abstraction layer

use super::config::GenerationConfig;

/// Instruction sent with every chat prompt
pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a helpful, concise AI assistant. Give brief, direct answers without extra elaboration.";

/// Request to generate a single completion
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateRequest {
    /// The user's text
    pub prompt: String,
    /// System prompt/instructions
    pub system: Option<String>,
    /// Generation parameters
    pub config: GenerationConfig,
}

impl GenerateRequest {
    /// Build the request used for a chat turn: fixed system prompt and options
    pub fn chat(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: Some(DEFAULT_SYSTEM_PROMPT.to_string()),
            config: GenerationConfig::chat(),
        }
    }
}

/// Outcome of a completed generation
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateResult {
    /// Raw generated text, before shaping
    pub text: String,
    /// Whether the server reported the generation as finished
    pub done: bool,
}
