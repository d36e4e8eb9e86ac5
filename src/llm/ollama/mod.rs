//! Ollama provider implementation
//!
//! This module provides a client for a local Ollama server reached over
//! loopback HTTP.

pub mod client;
pub mod mapper;
pub mod types;

// Re-export commonly used types
pub use client::{OllamaClient, DEFAULT_MODEL, DEFAULT_OLLAMA_URL};
