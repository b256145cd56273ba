//! Common utilities shared across all portal services.
//!
//! This crate provides:
//! - Unified error handling and the `{ success, error }` action result
//! - Configuration structures
//! - The cancellation token used by simulated-latency operations

pub mod cancel;
pub mod config;
pub mod error;

pub use cancel::CancellationToken;
pub use config::*;
pub use error::{ActionResult, AppError, AppResult, OptionExt};
