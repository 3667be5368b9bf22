//! Booking Pricing Module
//!
//! - [`guest_pricing`] - unit price for a party size
//! - [`config_resolver`] - stored service record -> typed discount config
//! - [`discount_calculator`] - discount engine
//! - [`quote`] - full checkout quote (all of the above)
//!
//! All functions are pure; callers may invoke them concurrently.

pub mod config_resolver;
pub mod discount_calculator;
mod error;
pub mod guest_pricing;
pub mod money;
pub mod quote;
pub mod time_window;

pub use config_resolver::resolve_discount_config;
pub use discount_calculator::{calculate_discounted_price, free_hour_outcome, FreeHourOutcome};
pub use error::PricingError;
pub use guest_pricing::{resolve_guest_price, select_guest_tier};
pub use quote::{booking_duration, build_booking_quote};
