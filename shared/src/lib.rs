//! Shared types for the venue pricing workspace
//!
//! Domain models exchanged between the pricing engine, the HTTP layer and
//! its clients, plus the unified error/response types.

pub mod error;
pub mod models;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
