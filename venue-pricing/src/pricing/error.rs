//! Pricing errors
//!
//! Only precondition violations and "cannot price this party" are errors.
//! Malformed discount configuration is never an error.

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    #[error("base price must be between 0.01 and 1000000, got {0}")]
    InvalidBasePrice(f64),

    #[error("duration must be between 0.01 and 1000 hours, got {0} hours")]
    InvalidDuration(f64),

    #[error("guest count must be at least 1, got {0}")]
    InvalidGuestCount(u32),

    #[error("no price available for {guest_count} guests")]
    NoApplicablePrice { guest_count: u32 },

    #[error("booking end {end} must be after start {start}")]
    InvalidTimeWindow { start: String, end: String },
}

impl PricingError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidBasePrice(_) => ErrorCode::PricingInvalidBasePrice,
            Self::InvalidDuration(_) => ErrorCode::PricingInvalidDuration,
            Self::InvalidGuestCount(_) => ErrorCode::PricingInvalidGuestCount,
            Self::NoApplicablePrice { .. } => ErrorCode::PricingNoApplicablePrice,
            Self::InvalidTimeWindow { .. } => ErrorCode::PricingInvalidTimeWindow,
        }
    }
}

impl From<PricingError> for AppError {
    fn from(err: PricingError) -> Self {
        let app = AppError::with_message(err.code(), err.to_string());
        match err {
            PricingError::InvalidBasePrice(v) => app.with_detail("base_price", v),
            PricingError::InvalidDuration(v) => app.with_detail("duration_hours", v),
            PricingError::InvalidGuestCount(v) => app.with_detail("guest_count", v),
            PricingError::NoApplicablePrice { guest_count } => {
                app.with_detail("guest_count", guest_count)
            }
            PricingError::InvalidTimeWindow { start, end } => app
                .with_detail("booking_start_time", start)
                .with_detail("booking_end_time", end),
        }
    }
}
