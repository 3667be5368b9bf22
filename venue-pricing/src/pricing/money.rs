//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to `f64`
//! for serialization.

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Smallest chargeable price (one cent)
pub const MIN_PRICE: f64 = 0.01;
/// Maximum allowed booking price (1,000,000)
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Shortest accepted duration (hours, below one minute)
pub const MIN_DURATION_HOURS: f64 = 0.01;
/// Maximum allowed booking duration (hours)
pub const MAX_DURATION_HOURS: f64 = 1_000.0;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert f64 to Decimal only if it lies within `[min, max]`
///
/// Rejects NaN/Infinity and anything Decimal cannot hold, instead of
/// collapsing it to zero like [`to_decimal`].
pub fn to_bounded_decimal(value: f64, min: f64, max: f64) -> Option<Decimal> {
    if !value.is_finite() || value < min || value > max {
        return None;
    }
    Decimal::from_f64(value).filter(|d| !d.is_zero())
}

/// Round to cents, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Convert Decimal to f64 without rounding (hours, percentages)
#[inline]
pub fn to_f64_exact(value: Decimal) -> f64 {
    value.normalize().to_f64().unwrap_or_default()
}

/// Percentage (30 = 30%) as a multiplier of what remains: 0.70
#[inline]
pub fn keep_ratio(percent: Decimal) -> Decimal {
    Decimal::ONE - percent / Decimal::ONE_HUNDRED
}
