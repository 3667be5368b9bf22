//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 422 Unprocessable Entity (well-formed request the service cannot price)
            Self::PricingNoApplicablePrice => StatusCode::UNPROCESSABLE_ENTITY,

            // 400 Bad Request (unreadable body, pricing preconditions)
            Self::InvalidRequest
            | Self::PricingInvalidBasePrice
            | Self::PricingInvalidDuration
            | Self::PricingInvalidGuestCount
            | Self::PricingInvalidTimeWindow => StatusCode::BAD_REQUEST,
        }
    }
}
