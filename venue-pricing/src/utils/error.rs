//! Error handling for HTTP handlers
//!
//! Re-exports the unified error types from `shared::error` and adds
//! small helpers for building success responses.
//!
//! ```ignore
//! // failure: PricingError converts into AppError via `?`
//! let result = calculate_discounted_price(&request, &config)?;
//!
//! // success
//! Ok(ok(result))
//! ```

use axum::Json;
use serde::Serialize;

pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

/// Wrap data in a success response
pub fn ok<T: Serialize>(data: T) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success(data))
}

/// Wrap data in a success response with a custom message
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<ApiResponse<T>> {
    Json(ApiResponse::success_with_message(message, data))
}
