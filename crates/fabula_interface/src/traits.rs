//! Trait definitions for LLM backends and their capabilities.

use crate::HealthStatus;
use async_trait::async_trait;
use fabula_core::{GenerateRequest, GenerateResponse};
use fabula_error::FabulaResult;

/// Core trait that all inference backends must implement.
///
/// This provides the minimal interface for synchronous text generation.
/// Additional capabilities are exposed through optional traits.
#[async_trait]
pub trait FabulaDriver: Send + Sync {
    /// Generate model output given a composed request.
    ///
    /// Failure propagates to the caller immediately: there is no retry or
    /// backoff at this seam.
    async fn generate(&self, req: &GenerateRequest) -> FabulaResult<GenerateResponse>;

    /// Provider name (e.g., "ollama").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "llama3").
    fn model_name(&self) -> &str;
}

/// Trait for backends that support liveness probes.
#[async_trait]
pub trait Health: FabulaDriver {
    /// Check if the backend is reachable and functioning.
    ///
    /// Probes a lightweight endpoint rather than running a generation, so it
    /// is cheap enough to call before every assembly.
    async fn health(&self) -> HealthStatus;
}
