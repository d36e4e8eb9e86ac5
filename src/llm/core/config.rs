//! Generation configuration parameters

use serde::{Deserialize, Serialize};

/// Stop markers that keep the model from inventing the next user turn
pub const DEFAULT_STOP_SEQUENCES: [&str; 3] = ["\n\nUser:", "User:", "\nUser"];

/// Parameters for controlling text generation.
///
/// Serializes to the `options` object of Ollama's generate endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum number of tokens to generate
    #[serde(rename = "num_predict")]
    pub max_tokens: u32,
    /// Randomness (0.0-1.0, higher = more random)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Stop generation when these sequences are encountered
    #[serde(rename = "stop", skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,
}

impl GenerationConfig {
    /// Create a new configuration with the specified max tokens
    pub fn new(max_tokens: u32) -> Self {
        Self {
            max_tokens,
            temperature: None,
            stop_sequences: None,
        }
    }

    /// Set the temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set stop sequences
    pub fn with_stop_sequences(mut self, stop_sequences: Vec<String>) -> Self {
        self.stop_sequences = Some(stop_sequences);
        self
    }

    /// The options used for every chat reply: short, mildly creative, and
    /// cut off before the model starts a fake "User:" turn.
    pub fn chat() -> Self {
        Self::new(100).with_temperature(0.7).with_stop_sequences(
            DEFAULT_STOP_SEQUENCES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }
}
