// HTTP request and response bodies

use serde::{Deserialize, Serialize};

use crate::supervisor::StartupPhase;

// Request Types
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

// Chat reply: either the shaped text or an error message
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ChatReply {
    Response { response: String },
    Error { error: String },
}

impl ChatReply {
    pub fn response(text: impl Into<String>) -> Self {
        ChatReply::Response {
            response: text.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        ChatReply::Error {
            error: message.into(),
        }
    }
}

// Health Status Enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ready,
    Initializing,
}

// Health Response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub startup: StartupPhase,
}
