//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Pricing errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Request body could not be read (malformed JSON, missing field)
    InvalidRequest = 5,

    // ==================== 4xxx: Pricing ====================
    /// Base price missing, non-positive or out of range
    PricingInvalidBasePrice = 4001,
    /// Duration missing, non-positive or out of range
    PricingInvalidDuration = 4002,
    /// Guest count must be at least 1
    PricingInvalidGuestCount = 4003,
    /// No guest-count tier accommodates the party
    PricingNoApplicablePrice = 4004,
    /// Booking end is not after booking start
    PricingInvalidTimeWindow = 4005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::InvalidRequest => "Invalid request",

            // Pricing
            ErrorCode::PricingInvalidBasePrice => "Base price is not a valid booking price",
            ErrorCode::PricingInvalidDuration => "Duration is not a valid booking duration",
            ErrorCode::PricingInvalidGuestCount => "Guest count must be at least 1",
            ErrorCode::PricingNoApplicablePrice => "No price available for this guest count",
            ErrorCode::PricingInvalidTimeWindow => "Booking end time must be after start time",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            5 => Ok(ErrorCode::InvalidRequest),

            // Pricing
            4001 => Ok(ErrorCode::PricingInvalidBasePrice),
            4002 => Ok(ErrorCode::PricingInvalidDuration),
            4003 => Ok(ErrorCode::PricingInvalidGuestCount),
            4004 => Ok(ErrorCode::PricingNoApplicablePrice),
            4005 => Ok(ErrorCode::PricingInvalidTimeWindow),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
