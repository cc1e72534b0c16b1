//! Route wiring and request handlers.

use crate::response::{ErrorBody, HealthBody, StoryRequest};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use fabula_error::{FabulaError, FabulaErrorKind};
use fabula_interface::{FabulaDriver, Health, HealthStatus};
use fabula_narrative::{StoryAssembler, DEFAULT_TOTAL_CHUNKS};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Message returned when the inference backend cannot be reached.
const BACKEND_DOWN: &str = "Cannot connect to Ollama. Make sure it is running.";

/// Shared state for the HTTP facade: the assembler and its driver.
///
/// No mutable state lives here; every request builds its own story document.
pub struct AppState<D> {
    assembler: StoryAssembler<D>,
}

impl<D: FabulaDriver + Health> AppState<D> {
    /// Wrap a driver for use by the routes.
    pub fn new(driver: D) -> Self {
        Self {
            assembler: StoryAssembler::new(driver),
        }
    }

    /// The wrapped assembler.
    pub fn assembler(&self) -> &StoryAssembler<D> {
        &self.assembler
    }
}

/// Build the router for the facade.
pub fn create_router<D>(state: Arc<AppState<D>>) -> Router
where
    D: FabulaDriver + Health + 'static,
{
    Router::new()
        .route("/test-model", post(test_model::<D>))
        .route("/health", get(health::<D>))
        .with_state(state)
}

/// Generate a complete storyboard for the submitted prompt.
#[instrument(skip(state, request))]
async fn test_model<D>(
    State(state): State<Arc<AppState<D>>>,
    Json(request): Json<StoryRequest>,
) -> Response
where
    D: FabulaDriver + Health + 'static,
{
    let Some(prompt) = request.prompt.filter(|p| !p.trim().is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("Please provide a prompt")),
        )
            .into_response();
    };

    // Probe before spending any generation time: an unreachable backend
    // short-circuits to 503 instead of failing mid-assembly.
    if let HealthStatus::Disconnected { reason } = state.assembler.driver().health().await {
        warn!(reason = %reason, "Rejecting request, backend unreachable");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorBody::new(BACKEND_DOWN)),
        )
            .into_response();
    }

    match state
        .assembler
        .assemble(&prompt, DEFAULT_TOTAL_CHUNKS)
        .await
    {
        Ok(story) => {
            info!(sequences = story.sequence.len(), "Returning assembled story");
            (StatusCode::OK, Json(story)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Map an assembly failure onto the wire envelope.
///
/// Nothing of a partially assembled story is ever returned.
fn error_response(err: FabulaError) -> Response {
    error!(error = %err, "Story assembly failed");

    match err.kind() {
        FabulaErrorKind::Ollama(e) if e.is_unavailable() => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorBody::new(BACKEND_DOWN)),
        )
            .into_response(),
        _ => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new(format!("Error: {err}"))),
        )
            .into_response(),
    }
}

/// Report backend liveness.
#[instrument(skip(state))]
async fn health<D>(State(state): State<Arc<AppState<D>>>) -> Response
where
    D: FabulaDriver + Health + 'static,
{
    match state.assembler.driver().health().await {
        HealthStatus::Connected => (StatusCode::OK, Json(HealthBody::healthy())).into_response(),
        HealthStatus::Disconnected { reason } => {
            warn!(reason = %reason, "Backend probe failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthBody::degraded(reason)),
            )
                .into_response()
        }
    }
}
