//! Request and response envelopes for the HTTP facade.

use serde::{Deserialize, Serialize};

/// Body of a `POST /test-model` request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StoryRequest {
    /// The user's story prompt
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Error envelope returned by every failing route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable failure description
    pub error: String,
    /// Always "error"
    pub status: String,
}

impl ErrorBody {
    /// Create an error envelope.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status: "error".to_string(),
        }
    }
}

/// Body of a `GET /health` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthBody {
    /// "healthy" or "degraded"
    pub status: String,
    /// "connected" or "disconnected"
    pub ollama_status: String,
    /// Probe failure description, present only when degraded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl HealthBody {
    /// Envelope for a reachable backend.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            ollama_status: "connected".to_string(),
            error: None,
        }
    }

    /// Envelope for an unreachable backend.
    pub fn degraded(reason: impl Into<String>) -> Self {
        Self {
            status: "degraded".to_string(),
            ollama_status: "disconnected".to_string(),
            error: Some(reason.into()),
        }
    }
}
