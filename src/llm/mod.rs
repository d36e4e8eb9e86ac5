//! LLM Abstraction Layer
//!
//! This module provides the interface the relay uses to talk to a local
//! Ollama server, plus the reply shaping applied to its completions.

pub mod core;
pub mod ollama;
pub mod shaping;

// Re-export commonly used types
pub use core::{
    config::GenerationConfig,
    error::LlmError,
    provider::{create_provider, LlmProvider},
    types::{GenerateRequest, GenerateResult, DEFAULT_SYSTEM_PROMPT},
};

pub use ollama::OllamaClient;
pub use shaping::shape_response;
