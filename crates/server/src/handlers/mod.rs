//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the `brandcircle-server`.

pub mod branding;
pub mod general;

// Re-export all handlers so the router can reach them under `handlers::`.
pub use branding::*;
pub use general::*;

// Shared items used by the handler modules.
use super::{errors::AppError, state::AppState};
