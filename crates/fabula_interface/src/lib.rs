//! Trait definitions for the Fabula storyboard service.
//!
//! The assembler and the HTTP layer are generic over these seams so that
//! backends can be swapped and tests can run against scripted drivers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{FabulaDriver, Health};
pub use types::HealthStatus;
