//! Binary entry point for the Fabula storyboard server.

use anyhow::Result;
use fabula_error::{ServerError, ServerErrorKind};
use fabula_models::OllamaClient;
use fabula_server::{create_router, init_tracing, AppState, ServerConfig};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    init_tracing(&config).map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let client = OllamaClient::from_env();
    info!(
        backend = %client.config().base_url(),
        model = %client.config().model(),
        addr = %config.listen_addr(),
        "Starting Fabula storyboard server"
    );

    let state = Arc::new(AppState::new(client));
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .map_err(|e| {
            ServerError::new(ServerErrorKind::Bind(format!(
                "{}: {e}",
                config.listen_addr()
            )))
        })?;
    axum::serve(listener, router).await?;

    Ok(())
}
