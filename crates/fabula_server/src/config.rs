//! Configuration for the HTTP facade.

use fabula_error::{ServerError, ServerErrorKind};

/// Configuration for the HTTP facade.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "0.0.0.0")
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level filter when `RUST_LOG` is unset (e.g., "info", "debug")
    pub log_level: String,
    /// Emit JSON-formatted logs
    pub json_logs: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5007,
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}

impl ServerConfig {
    /// Create config from environment variables.
    ///
    /// Reads:
    /// - `FABULA_HOST` (default: "0.0.0.0")
    /// - `FABULA_PORT` (default: 5007)
    /// - `FABULA_LOG` (default: "info")
    /// - `FABULA_LOG_JSON` (default: off; "1" or "true" enables)
    pub fn from_env() -> Result<Self, ServerError> {
        let defaults = Self::default();

        let host = std::env::var("FABULA_HOST").unwrap_or(defaults.host);
        let port = match std::env::var("FABULA_PORT") {
            Ok(raw) => raw.parse().map_err(|_| {
                ServerError::new(ServerErrorKind::Configuration(format!(
                    "FABULA_PORT is not a valid port: {raw}"
                )))
            })?,
            Err(_) => defaults.port,
        };
        let log_level = std::env::var("FABULA_LOG").unwrap_or(defaults.log_level);
        let json_logs = std::env::var("FABULA_LOG_JSON")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.json_logs);

        Ok(Self {
            host,
            port,
            log_level,
            json_logs,
        })
    }

    /// The address to bind, as host:port.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
