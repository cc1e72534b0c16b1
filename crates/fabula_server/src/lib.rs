//! HTTP facade for the Fabula storyboard service.
//!
//! Two routes, both stateless across requests:
//!
//! - `POST /test-model`: forward a story prompt through the chunked
//!   assembler and return the merged storyboard document.
//! - `GET /health`: report whether the inference backend answers a
//!   lightweight probe.
//!
//! The router is generic over the driver seam so tests can exercise the
//! handlers with a scripted mock instead of a live Ollama server.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;
mod response;
mod server;

pub use config::ServerConfig;
pub use observability::init_tracing;
pub use response::{ErrorBody, HealthBody, StoryRequest};
pub use server::{create_router, AppState};
