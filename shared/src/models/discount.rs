//! Service Discount Configuration Model
//!
//! Typed form of the four discount mechanisms a service can carry.
//! Values arrive loosely typed from storage and are validated by the
//! pricing crate's config resolver before they reach these types.

use serde::{Deserialize, Serialize};

/// Tiered discount unlocked by party size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRule {
    /// Minimum number of guests (>= 1)
    pub min_guests: u32,
    /// Discount percentage (30 = 30%)
    pub discount_percent: f64,
}

/// Time-of-day discount window (same-day, "HH:MM")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeslotRule {
    pub start: String,
    pub end: String,
    pub discount_percent: f64,
}

/// "Pay N hours, get M hours free" bundle
///
/// The bundle repeats across the booking: every complete block of
/// `threshold_hours + free_hours` is charged `threshold_hours`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeHourRule {
    pub threshold_hours: f64,
    pub free_hours: f64,
    /// Restrict to these services (empty = all services)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_ids: Vec<String>,
}

impl FreeHourRule {
    /// Whether this bundle is offered for the given service
    pub fn applies_to(&self, service_id: Option<&str>) -> bool {
        if self.service_ids.is_empty() {
            return true;
        }
        match service_id {
            Some(id) => self.service_ids.iter().any(|s| s == id),
            None => false,
        }
    }
}

/// Discount configuration of a single service (服务折扣配置)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountConfig {
    /// Flat percentage off the running price (0 = none)
    #[serde(default)]
    pub overall_discount_percent: f64,
    #[serde(default)]
    pub group_discounts: Vec<GroupRule>,
    #[serde(default)]
    pub timeslot_discounts: Vec<TimeslotRule>,
    #[serde(default)]
    pub free_hour_discounts: Vec<FreeHourRule>,
}

impl DiscountConfig {
    /// True when no mechanism can contribute a discount
    pub fn is_empty(&self) -> bool {
        self.overall_discount_percent <= 0.0
            && self.group_discounts.is_empty()
            && self.timeslot_discounts.is_empty()
            && self.free_hour_discounts.is_empty()
    }

    /// All configured rules, in the order the engine applies mechanisms
    pub fn rules(&self) -> Vec<DiscountRule<'_>> {
        let mut rules = Vec::new();
        if self.overall_discount_percent > 0.0 {
            rules.push(DiscountRule::Overall(self.overall_discount_percent));
        }
        rules.extend(self.free_hour_discounts.iter().map(DiscountRule::FreeHour));
        rules.extend(self.group_discounts.iter().map(DiscountRule::Group));
        rules.extend(self.timeslot_discounts.iter().map(DiscountRule::Timeslot));
        rules
    }

    /// Human-readable descriptions of every configured rule
    pub fn describe(&self) -> Vec<String> {
        self.rules().iter().map(DiscountRule::describe).collect()
    }
}

/// A single configured discount rule, tagged by mechanism
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiscountRule<'a> {
    Overall(f64),
    FreeHour(&'a FreeHourRule),
    Group(&'a GroupRule),
    Timeslot(&'a TimeslotRule),
}

impl DiscountRule<'_> {
    pub fn kind(&self) -> DiscountKind {
        match self {
            Self::Overall(_) => DiscountKind::Overall,
            Self::FreeHour(_) => DiscountKind::FreeHours,
            Self::Group(_) => DiscountKind::Group,
            Self::Timeslot(_) => DiscountKind::Timeslot,
        }
    }

    /// Short English description for listings
    pub fn describe(&self) -> String {
        match self {
            Self::Overall(percent) => format!("{}% off every booking", fmt_number(*percent)),
            Self::FreeHour(rule) => format!(
                "Book {}h, get {}h free",
                fmt_number(rule.threshold_hours),
                fmt_number(rule.free_hours)
            ),
            Self::Group(rule) => format!(
                "{}% off for groups of {} or more",
                fmt_number(rule.discount_percent),
                rule.min_guests
            ),
            Self::Timeslot(rule) => format!(
                "{}% off between {} and {}",
                fmt_number(rule.discount_percent),
                rule.start,
                rule.end
            ),
        }
    }
}

/// Discount mechanism, serialized as its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiscountKind {
    #[serde(rename = "Overall Discount")]
    Overall,
    #[serde(rename = "Free Hours")]
    FreeHours,
    #[serde(rename = "Group Discount")]
    Group,
    #[serde(rename = "Timeslot Discount")]
    Timeslot,
}

impl DiscountKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Overall => "Overall Discount",
            Self::FreeHours => "Free Hours",
            Self::Group => "Group Discount",
            Self::Timeslot => "Timeslot Discount",
        }
    }
}

impl std::fmt::Display for DiscountKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 10.0 -> "10", 2.5 -> "2.5"
fn fmt_number(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
