//! Discount Configuration Resolver
//!
//! Adapts a persisted service record (loosely typed JSON) into the typed
//! [`DiscountConfig`] consumed by the calculator.
//!
//! Every field defaults to "no discount". Wrong shapes (a string where an
//! array is expected, a rule missing a field, a non-positive percentage)
//! are dropped, never reported as errors. Field names are accepted in the
//! stored snake_case form and in the camelCase form sent by the web client.

use serde_json::{Map, Value};
use shared::models::{DiscountConfig, FreeHourRule, GroupRule, TimeslotRule};

use super::time_window::parse_time_of_day;

const MAX_PERCENT: f64 = 100.0;

/// Resolve the discount configuration of a service record
pub fn resolve_discount_config(record: &Value) -> DiscountConfig {
    let Some(fields) = record.as_object() else {
        return DiscountConfig::default();
    };

    let overall_discount_percent = field(
        fields,
        &["overall_discount_percent", "overallDiscountPercent", "overall_discount"],
    )
    .and_then(as_percent)
    .unwrap_or(0.0);

    DiscountConfig {
        overall_discount_percent,
        group_discounts: rule_array(
            fields,
            &["group_discounts", "groupDiscounts"],
            parse_group_rule,
        ),
        timeslot_discounts: rule_array(
            fields,
            &["timeslot_discounts", "timeslotDiscounts"],
            parse_timeslot_rule,
        ),
        free_hour_discounts: rule_array(
            fields,
            &["free_hour_discounts", "freeHourDiscounts"],
            parse_free_hour_rule,
        ),
    }
}

/// First present, non-null value among the candidate keys
fn field<'a>(fields: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .find(|value| !value.is_null())
}

/// Numeric value from a JSON number or numeric string
fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// Positive percentage, capped at 100
fn as_percent(value: &Value) -> Option<f64> {
    as_number(value)
        .filter(|p| *p > 0.0)
        .map(|p| p.min(MAX_PERCENT))
}

fn as_positive(value: &Value) -> Option<f64> {
    as_number(value).filter(|v| *v > 0.0)
}

/// Whole guest count >= 1 (fractional values are rounded up)
fn as_guest_count(value: &Value) -> Option<u32> {
    let count = as_number(value)?.ceil();
    (count >= 1.0 && count <= u32::MAX as f64).then_some(count as u32)
}

/// "HH:MM" string that parses as a time of day
fn as_time(value: &Value) -> Option<String> {
    let time = value.as_str()?.trim();
    parse_time_of_day(time).map(|_| time.to_string())
}

/// Parse an array of rules, dropping malformed entries
fn rule_array<T>(
    fields: &Map<String, Value>,
    keys: &[&str],
    parse: fn(&Map<String, Value>) -> Option<T>,
) -> Vec<T> {
    let Some(value) = field(fields, keys) else {
        return Vec::new();
    };
    let Some(items) = value.as_array() else {
        tracing::debug!(keys = ?keys, "Discount rules are not an array, ignoring");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let rule = item.as_object().and_then(parse);
            if rule.is_none() {
                tracing::debug!(rule = %item, "Dropping malformed discount rule");
            }
            rule
        })
        .collect()
}

fn parse_group_rule(rule: &Map<String, Value>) -> Option<GroupRule> {
    Some(GroupRule {
        min_guests: field(rule, &["min_guests", "minGuests"]).and_then(as_guest_count)?,
        discount_percent: field(rule, &["discount_percent", "discountPercent", "discount"])
            .and_then(as_percent)?,
    })
}

fn parse_timeslot_rule(rule: &Map<String, Value>) -> Option<TimeslotRule> {
    Some(TimeslotRule {
        start: field(rule, &["start", "start_time", "startTime"]).and_then(as_time)?,
        end: field(rule, &["end", "end_time", "endTime"]).and_then(as_time)?,
        discount_percent: field(rule, &["discount_percent", "discountPercent", "discount"])
            .and_then(as_percent)?,
    })
}

fn parse_free_hour_rule(rule: &Map<String, Value>) -> Option<FreeHourRule> {
    let service_ids = match field(rule, &["service_ids", "serviceIds"]) {
        Some(Value::Array(ids)) => ids
            .iter()
            .filter_map(|id| match id {
                Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    Some(FreeHourRule {
        threshold_hours: field(rule, &["threshold_hours", "thresholdHours", "threshold"])
            .and_then(as_positive)?,
        free_hours: field(rule, &["free_hours", "freeHours"]).and_then(as_positive)?,
        service_ids,
    })
}
