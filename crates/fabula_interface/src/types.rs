//! Core type definitions for the Fabula interface.

use serde::{Deserialize, Serialize};

/// Result of a backend liveness probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    /// Backend answered the probe
    Connected,
    /// Backend could not be reached
    Disconnected {
        /// Description of the failure
        reason: String,
    },
}

impl HealthStatus {
    /// Whether the backend answered the probe.
    pub fn is_connected(&self) -> bool {
        matches!(self, HealthStatus::Connected)
    }
}
