//! Bookable Service Model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Guest-count price tier: parties up to `max_guests` pay `price`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestPricingRule {
    pub max_guests: u32,
    pub price: f64,
}

/// How a service's base price scales with party size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingMode {
    /// Flat rate per table/station, guest count ignored
    PerTable,
    /// Priced by guest-count tiers
    PerGuest,
}

impl PricingMode {
    /// Classify a service type against the configured per-table types
    /// (case-insensitive)
    pub fn for_service_type<S: AsRef<str>>(service_type: &str, per_table_types: &[S]) -> Self {
        let service_type = service_type.trim();
        if per_table_types
            .iter()
            .any(|t| t.as_ref().eq_ignore_ascii_case(service_type))
        {
            Self::PerTable
        } else {
            Self::PerGuest
        }
    }
}

/// Service row as persisted by the venue backend
///
/// Only the pricing columns are typed; discount columns stay in `extra`
/// as raw JSON and go through the config resolver.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Service kind tag, e.g. "billiards", "ps5", "vr"
    #[serde(default)]
    pub service_type: String,
    /// Hourly price per unit (table or guest)
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub guest_pricing_rules: Vec<GuestPricingRule>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServiceRecord {
    /// Raw discount columns, as handed to the config resolver
    pub fn discount_fields(&self) -> Value {
        Value::Object(self.extra.clone())
    }
}
