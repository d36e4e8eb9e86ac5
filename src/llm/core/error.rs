//! Error types for the LLM layer

use thiserror::Error;

/// Errors that can occur when talking to the inference server
#[derive(Debug, Error)]
pub enum LlmError {
    /// The server answered with a non-200 status
    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    /// Connection, timeout or other transport-level failures
    #[error("{0}")]
    Transport(String),

    /// JSON encoding/decoding issues
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl LlmError {
    /// True when the server was reached but refused or failed the request
    pub fn is_upstream_status(&self) -> bool {
        matches!(self, LlmError::HttpError { .. })
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return LlmError::SerializationError(err.to_string());
        }
        match err.status() {
            Some(status) => LlmError::HttpError {
                status: status.as_u16(),
                body: err.to_string(),
            },
            None => LlmError::Transport(err.to_string()),
        }
    }
}
