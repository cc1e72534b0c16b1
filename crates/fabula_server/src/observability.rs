//! Logging infrastructure for the HTTP facade.

use crate::ServerConfig;
use tracing_subscriber::{
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured log level applies.
/// JSON-formatted output is available for production log shippers.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed or the filter
/// directive fails to parse.
pub fn init_tracing(config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
