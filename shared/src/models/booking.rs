//! Booking Pricing Request/Result Model
//!
//! Constructed fresh on every price query (form preview, checkout).
//! Results are never persisted; only the final price is stored with the
//! booking as `total_price`.

use serde::{Deserialize, Serialize};

use super::discount::DiscountKind;
use super::service::{PricingMode, ServiceRecord};

/// Input to the discount engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingPricingRequest {
    /// Pre-discount total for the full duration
    pub base_price: f64,
    pub duration_hours: f64,
    pub guest_count: u32,
    /// Booking start (HH:MM), needed for timeslot discounts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_start_time: Option<String>,
    /// Booking end (HH:MM)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_end_time: Option<String>,
    /// Needed to filter service-scoped free-hour bundles
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
}

impl BookingPricingRequest {
    pub fn new(base_price: f64, duration_hours: f64, guest_count: u32) -> Self {
        Self {
            base_price,
            duration_hours,
            guest_count,
            booking_start_time: None,
            booking_end_time: None,
            service_id: None,
        }
    }

    pub fn with_time_window(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.booking_start_time = Some(start.into());
        self.booking_end_time = Some(end.into());
        self
    }

    pub fn with_service_id(mut self, service_id: impl Into<String>) -> Self {
        self.service_id = Some(service_id.into());
        self
    }
}

/// Parameter of each applied mechanism (display only)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountBreakdown {
    /// Overall discount percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_discount: Option<f64>,
    /// Number of free hours granted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_hours: Option<f64>,
    /// Group discount percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_discount: Option<f64>,
    /// Timeslot discount percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeslot_discount: Option<f64>,
}

impl DiscountBreakdown {
    pub fn get(&self, kind: DiscountKind) -> Option<f64> {
        match kind {
            DiscountKind::Overall => self.overall_discount,
            DiscountKind::FreeHours => self.free_hours,
            DiscountKind::Group => self.group_discount,
            DiscountKind::Timeslot => self.timeslot_discount,
        }
    }

    pub fn set(&mut self, kind: DiscountKind, value: f64) {
        let slot = match kind {
            DiscountKind::Overall => &mut self.overall_discount,
            DiscountKind::FreeHours => &mut self.free_hours,
            DiscountKind::Group => &mut self.group_discount,
            DiscountKind::Timeslot => &mut self.timeslot_discount,
        };
        *slot = Some(value);
    }
}

/// Output of the discount engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountCalculationResult {
    /// Input base price, unchanged
    pub original_price: f64,
    /// Chargeable price (2 decimals)
    pub final_price: f64,
    /// original_price - final_price (2 decimals, >= 0)
    pub total_savings: f64,
    /// Mechanisms that fired, in application order
    pub applied_discounts: Vec<DiscountKind>,
    pub discount_breakdown: DiscountBreakdown,
    /// Hours actually charged after free-hour bundling
    pub paid_hours: f64,
}

impl DiscountCalculationResult {
    pub fn has_discount(&self) -> bool {
        !self.applied_discounts.is_empty()
    }
}

/// Checkout quote input: raw service row plus booking intent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingQuoteRequest {
    pub service: ServiceRecord,
    pub guest_count: u32,
    /// Explicit duration; derived from the time window when absent
    #[serde(default)]
    pub duration_hours: Option<f64>,
    #[serde(default)]
    pub booking_start_time: Option<String>,
    #[serde(default)]
    pub booking_end_time: Option<String>,
}

/// Authoritative booking price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingQuote {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<String>,
    /// Display name shown on the checkout summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    pub pricing_mode: PricingMode,
    /// Hourly price resolved for this party size
    pub unit_price: f64,
    pub duration_hours: f64,
    pub guest_count: u32,
    pub pricing: DiscountCalculationResult,
}

impl BookingQuote {
    /// Value persisted as the booking's `total_price`
    pub fn total_price(&self) -> f64 {
        self.pricing.final_price
    }
}
