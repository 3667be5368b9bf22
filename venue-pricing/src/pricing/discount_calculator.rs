//! Discount Calculator
//!
//! Applies a service's discount configuration to a booking's base price.
//! Mechanisms run in a fixed order, each on the running price left by the
//! previous one (multiplicative stacking, not summed percentages):
//!
//! 1. Overall discount
//! 2. Free-hour bundle (first qualifying rule only)
//! 3. Group discount (best qualifying tier)
//! 4. Timeslot discount (first overlapping window, prorated by overlap)
//!
//! Uses rust_decimal for all arithmetic, f64 only at the boundary.

use rust_decimal::prelude::*;
use shared::models::{
    BookingPricingRequest, DiscountBreakdown, DiscountCalculationResult, DiscountConfig,
    DiscountKind, FreeHourRule, GroupRule, TimeslotRule,
};

use super::error::PricingError;
use super::money::{
    MAX_DURATION_HOURS, MAX_PRICE, MIN_DURATION_HOURS, MIN_PRICE, keep_ratio, round_money,
    to_bounded_decimal, to_decimal, to_f64, to_f64_exact,
};
use super::time_window::TimeWindow;

/// Outcome of a free-hour bundle on a booking duration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeHourOutcome {
    /// Hours actually charged
    pub charged_hours: Decimal,
    /// Hours given away
    pub free_hours: Decimal,
}

/// Validate engine preconditions, returning base price and duration as Decimal
///
/// Values outside the supported range are rejected before any arithmetic,
/// so nothing downstream divides by a collapsed zero or overflows.
fn validate_request(request: &BookingPricingRequest) -> Result<(Decimal, Decimal), PricingError> {
    let base_price = to_bounded_decimal(request.base_price, MIN_PRICE, MAX_PRICE)
        .ok_or(PricingError::InvalidBasePrice(request.base_price))?;
    let duration =
        to_bounded_decimal(request.duration_hours, MIN_DURATION_HOURS, MAX_DURATION_HOURS)
            .ok_or(PricingError::InvalidDuration(request.duration_hours))?;
    Ok((base_price, duration))
}

/// Percentage usable as a discount: positive, capped at 100
fn usable_percent(value: f64) -> Option<Decimal> {
    let percent = to_decimal(value);
    if percent > Decimal::ZERO {
        Some(percent.min(Decimal::ONE_HUNDRED))
    } else {
        None
    }
}

/// Apply a bundle rule to a duration
///
/// The bundle repeats: each complete block of `threshold + free` hours is
/// charged `threshold` hours, the leftover partial block is charged in full.
/// Returns `None` when the booking is shorter than one block or the rule is
/// malformed (including a block too large to represent).
pub fn free_hour_outcome(rule: &FreeHourRule, duration: Decimal) -> Option<FreeHourOutcome> {
    let threshold = to_decimal(rule.threshold_hours);
    let free = to_decimal(rule.free_hours);
    if threshold <= Decimal::ZERO || free <= Decimal::ZERO {
        return None;
    }

    let block = threshold.checked_add(free)?;
    if duration < block {
        return None;
    }

    let complete_blocks = (duration / block).floor();
    let remainder = duration - complete_blocks * block;
    let charged_hours = complete_blocks * threshold + remainder;

    if charged_hours < duration {
        Some(FreeHourOutcome {
            charged_hours,
            free_hours: duration - charged_hours,
        })
    } else {
        None
    }
}

/// First bundle (configuration order) that applies to the service and fits
/// the duration
fn select_free_hour_rule<'a>(
    rules: &'a [FreeHourRule],
    service_id: Option<&str>,
    duration: Decimal,
) -> Option<(&'a FreeHourRule, FreeHourOutcome)> {
    rules
        .iter()
        .filter(|rule| rule.applies_to(service_id))
        .find_map(|rule| free_hour_outcome(rule, duration).map(|outcome| (rule, outcome)))
}

/// Highest percentage among tiers the party qualifies for
///
/// Unlike guest-count pricing (tightest tier), a larger party must unlock at
/// least as much discount as a smaller one, so every qualifying tier competes.
pub fn best_group_discount(rules: &[GroupRule], guest_count: u32) -> Option<Decimal> {
    rules
        .iter()
        .filter(|rule| guest_count >= rule.min_guests)
        .filter_map(|rule| usable_percent(rule.discount_percent))
        .max()
}

/// First timeslot rule (configuration order) overlapping the booking
///
/// Returns the rule's percentage and the overlap in hours.
fn select_timeslot_rule(
    rules: &[TimeslotRule],
    booking: &TimeWindow,
) -> Option<(Decimal, Decimal)> {
    for rule in rules {
        let Some(percent) = usable_percent(rule.discount_percent) else {
            continue;
        };
        let Some(window) = TimeWindow::parse(&rule.start, &rule.end) else {
            tracing::warn!(
                start = %rule.start,
                end = %rule.end,
                "Ignoring timeslot discount with malformed time"
            );
            continue;
        };
        if let Some(overlap) = booking.overlap(&window) {
            let hours = overlap.hours();
            if hours > Decimal::ZERO {
                return Some((percent, hours));
            }
        }
    }
    None
}

/// Booking window from the request, when both ends are supplied and valid
fn booking_window(request: &BookingPricingRequest) -> Option<TimeWindow> {
    let (start, end) = (
        request.booking_start_time.as_deref()?,
        request.booking_end_time.as_deref()?,
    );
    let window = TimeWindow::parse(start, end);
    if window.is_none() {
        tracing::warn!(start, end, "Ignoring malformed booking time window");
    }
    window
}

/// Calculate the discounted price of a booking.
///
/// Pure and deterministic. Fails only on precondition violations
/// (`base_price` outside `MIN_PRICE..=MAX_PRICE`, `duration_hours` outside
/// `MIN_DURATION_HOURS..=MAX_DURATION_HOURS`); malformed discount rules simply
/// contribute nothing.
///
/// # Arguments
/// * `request` - Base price (already scaled to the full duration), duration, party, time window
/// * `config` - The service's discount configuration
pub fn calculate_discounted_price(
    request: &BookingPricingRequest,
    config: &DiscountConfig,
) -> Result<DiscountCalculationResult, PricingError> {
    let (original, duration) = validate_request(request)?;

    let mut running_price = original;
    let mut paid_hours = duration;
    let mut applied_discounts = Vec::new();
    let mut breakdown = DiscountBreakdown::default();

    // 1. Overall
    if let Some(percent) = usable_percent(config.overall_discount_percent) {
        running_price *= keep_ratio(percent);
        applied_discounts.push(DiscountKind::Overall);
        breakdown.set(DiscountKind::Overall, to_f64_exact(percent));
        tracing::debug!(%percent, %running_price, "Applied overall discount");
    }

    // 2. Free hours
    if let Some((rule, outcome)) = select_free_hour_rule(
        &config.free_hour_discounts,
        request.service_id.as_deref(),
        duration,
    ) {
        paid_hours = outcome.charged_hours;
        running_price = running_price * outcome.charged_hours / duration;
        applied_discounts.push(DiscountKind::FreeHours);
        breakdown.set(DiscountKind::FreeHours, to_f64_exact(outcome.free_hours));
        tracing::debug!(
            threshold_hours = rule.threshold_hours,
            free_hours = rule.free_hours,
            charged_hours = %outcome.charged_hours,
            %running_price,
            "Applied free-hour bundle"
        );
    }

    // 3. Group
    if let Some(percent) = best_group_discount(&config.group_discounts, request.guest_count) {
        running_price *= keep_ratio(percent);
        applied_discounts.push(DiscountKind::Group);
        breakdown.set(DiscountKind::Group, to_f64_exact(percent));
        tracing::debug!(%percent, guest_count = request.guest_count, %running_price, "Applied group discount");
    }

    // 4. Timeslot (prorated by the share of the booking inside the window)
    if let Some(booking) = booking_window(request)
        && let Some((percent, overlap_hours)) =
            select_timeslot_rule(&config.timeslot_discounts, &booking)
    {
        let share = (overlap_hours / duration).min(Decimal::ONE);
        let discount_amount = running_price * share * percent / Decimal::ONE_HUNDRED;
        running_price -= discount_amount;
        applied_discounts.push(DiscountKind::Timeslot);
        breakdown.set(DiscountKind::Timeslot, to_f64_exact(percent));
        tracing::debug!(%percent, %overlap_hours, %discount_amount, "Applied timeslot discount");
    }

    let final_price = round_money(running_price.clamp(Decimal::ZERO, original));
    let total_savings = round_money(original - final_price);

    Ok(DiscountCalculationResult {
        original_price: request.base_price,
        final_price: to_f64(final_price),
        total_savings: to_f64(total_savings),
        applied_discounts,
        discount_breakdown: breakdown,
        paid_hours: to_f64_exact(paid_hours),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn group(min_guests: u32, discount_percent: f64) -> GroupRule {
        GroupRule {
            min_guests,
            discount_percent,
        }
    }

    fn timeslot(start: &str, end: &str, discount_percent: f64) -> TimeslotRule {
        TimeslotRule {
            start: start.to_string(),
            end: end.to_string(),
            discount_percent,
        }
    }

    fn bundle(threshold_hours: f64, free_hours: f64) -> FreeHourRule {
        FreeHourRule {
            threshold_hours,
            free_hours,
            service_ids: vec![],
        }
    }

    fn scoped_bundle(threshold_hours: f64, free_hours: f64, service: &str) -> FreeHourRule {
        FreeHourRule {
            threshold_hours,
            free_hours,
            service_ids: vec![service.to_string()],
        }
    }

    // ========== Individual mechanisms ==========

    #[test]
    fn test_no_discounts() {
        let req = BookingPricingRequest::new(100.0, 2.0, 4).with_time_window("18:00", "20:00");
        let result = calculate_discounted_price(&req, &DiscountConfig::default()).unwrap();

        assert_eq!(result.original_price, 100.0);
        assert_eq!(result.final_price, 100.0);
        assert_eq!(result.total_savings, 0.0);
        assert!(result.applied_discounts.is_empty());
        assert_eq!(result.discount_breakdown, DiscountBreakdown::default());
        assert_eq!(result.paid_hours, 2.0);
    }

    #[test]
    fn test_overall_discount_only() {
        let config = DiscountConfig {
            overall_discount_percent: 20.0,
            ..Default::default()
        };
        let req = BookingPricingRequest::new(100.0, 2.0, 1);
        let result = calculate_discounted_price(&req, &config).unwrap();

        assert_eq!(result.final_price, 80.0);
        assert_eq!(result.total_savings, 20.0);
        assert_eq!(result.applied_discounts, vec![DiscountKind::Overall]);
        assert_eq!(result.discount_breakdown.overall_discount, Some(20.0));
        assert_eq!(result.paid_hours, 2.0);
    }

    #[test]
    fn test_free_hours_complete_blocks() {
        // block = 4h, 2 complete blocks, 6h charged
        let config = DiscountConfig {
            free_hour_discounts: vec![bundle(3.0, 1.0)],
            ..Default::default()
        };
        let req = BookingPricingRequest::new(120.0, 8.0, 1);
        let result = calculate_discounted_price(&req, &config).unwrap();

        assert_eq!(result.paid_hours, 6.0);
        assert_eq!(result.final_price, 90.0);
        assert_eq!(result.total_savings, 30.0);
        assert_eq!(result.applied_discounts, vec![DiscountKind::FreeHours]);
        assert_eq!(result.discount_breakdown.free_hours, Some(2.0));
    }

    #[test]
    fn test_free_hours_with_remainder() {
        // 10h: 2 blocks of 4h + 2h remainder -> 3 + 3 + 2 = 8h charged
        let config = DiscountConfig {
            free_hour_discounts: vec![bundle(3.0, 1.0)],
            ..Default::default()
        };
        let req = BookingPricingRequest::new(100.0, 10.0, 1);
        let result = calculate_discounted_price(&req, &config).unwrap();

        assert_eq!(result.paid_hours, 8.0);
        assert_eq!(result.final_price, 80.0);
        assert_eq!(result.discount_breakdown.free_hours, Some(2.0));
    }

    #[test]
    fn test_free_hours_fractional_duration() {
        // 7.5h: 1 block of 4h + 3.5h remainder -> 6.5h charged
        let outcome = free_hour_outcome(&bundle(3.0, 1.0), dec!(7.5)).unwrap();
        assert_eq!(outcome.charged_hours, dec!(6.5));
        assert_eq!(outcome.free_hours, dec!(1));
    }

    #[test]
    fn test_free_hours_shorter_than_block() {
        let config = DiscountConfig {
            free_hour_discounts: vec![bundle(3.0, 1.0)],
            ..Default::default()
        };
        let req = BookingPricingRequest::new(90.0, 3.0, 1);
        let result = calculate_discounted_price(&req, &config).unwrap();

        assert_eq!(result.final_price, 90.0);
        assert_eq!(result.paid_hours, 3.0);
        assert!(result.applied_discounts.is_empty());
    }

    #[test]
    fn test_free_hours_first_match_wins() {
        // Second rule would be more generous but only the first qualifying applies
        let config = DiscountConfig {
            free_hour_discounts: vec![bundle(3.0, 1.0), bundle(1.0, 1.0)],
            ..Default::default()
        };
        let req = BookingPricingRequest::new(80.0, 8.0, 1);
        let result = calculate_discounted_price(&req, &config).unwrap();

        assert_eq!(result.paid_hours, 6.0);
        assert_eq!(result.final_price, 60.0);
    }

    #[test]
    fn test_free_hours_skips_non_qualifying_rules() {
        // Rule 1 is scoped to another service, rule 2 needs a longer booking
        let config = DiscountConfig {
            free_hour_discounts: vec![
                scoped_bundle(1.0, 1.0, "svc-other"),
                bundle(6.0, 2.0),
                bundle(2.0, 1.0),
            ],
            ..Default::default()
        };
        let req = BookingPricingRequest::new(100.0, 6.0, 1).with_service_id("svc-1");
        let result = calculate_discounted_price(&req, &config).unwrap();

        // block 3h, 2 blocks -> 4h charged: 100 * 4/6 = 66.666.. -> 66.67
        assert_eq!(result.paid_hours, 4.0);
        assert_eq!(result.final_price, 66.67);
        assert_eq!(result.total_savings, 33.33);
    }

    #[test]
    fn test_free_hours_scoped_rule_needs_service_id() {
        let config = DiscountConfig {
            free_hour_discounts: vec![scoped_bundle(2.0, 1.0, "svc-1")],
            ..Default::default()
        };
        let anonymous = BookingPricingRequest::new(90.0, 3.0, 1);
        let result = calculate_discounted_price(&anonymous, &config).unwrap();
        assert_eq!(result.final_price, 90.0);

        let scoped = anonymous.with_service_id("svc-1");
        let result = calculate_discounted_price(&scoped, &config).unwrap();
        assert_eq!(result.final_price, 60.0);
        assert_eq!(result.paid_hours, 2.0);
    }

    #[test]
    fn test_malformed_free_hour_rules_ignored() {
        assert_eq!(free_hour_outcome(&bundle(0.0, 1.0), dec!(8)), None);
        assert_eq!(free_hour_outcome(&bundle(3.0, -1.0), dec!(8)), None);
        assert_eq!(free_hour_outcome(&bundle(f64::NAN, 1.0), dec!(8)), None);
        assert_eq!(free_hour_outcome(&bundle(7.9e28, 7.9e28), dec!(8)), None);
    }

    #[test]
    fn test_group_discount_takes_max_qualifying_tier() {
        let rules = vec![group(2, 10.0), group(5, 25.0)];
        assert_eq!(best_group_discount(&rules, 6), Some(dec!(25)));
        assert_eq!(best_group_discount(&rules, 3), Some(dec!(10)));
        assert_eq!(best_group_discount(&rules, 1), None);

        // A smaller tier with a bigger discount still wins
        let rules = vec![group(5, 10.0), group(2, 30.0)];
        assert_eq!(best_group_discount(&rules, 6), Some(dec!(30)));
    }

    #[test]
    fn test_group_discount_applied() {
        let config = DiscountConfig {
            group_discounts: vec![group(2, 10.0), group(5, 25.0)],
            ..Default::default()
        };
        let req = BookingPricingRequest::new(200.0, 2.0, 6);
        let result = calculate_discounted_price(&req, &config).unwrap();

        assert_eq!(result.final_price, 150.0);
        assert_eq!(result.applied_discounts, vec![DiscountKind::Group]);
        assert_eq!(result.discount_breakdown.group_discount, Some(25.0));
    }

    #[test]
    fn test_group_discount_ignores_non_positive_percent() {
        let rules = vec![group(1, 0.0), group(2, -5.0)];
        assert_eq!(best_group_discount(&rules, 4), None);
    }

    #[test]
    fn test_timeslot_proportional_overlap() {
        // 2 of 4 hours inside the window at 50%: 100 - 100 * 0.5 * 0.5
        let config = DiscountConfig {
            timeslot_discounts: vec![timeslot("20:00", "22:00", 50.0)],
            ..Default::default()
        };
        let req = BookingPricingRequest::new(100.0, 4.0, 1).with_time_window("18:00", "22:00");
        let result = calculate_discounted_price(&req, &config).unwrap();

        assert_eq!(result.final_price, 75.0);
        assert_eq!(result.total_savings, 25.0);
        assert_eq!(result.applied_discounts, vec![DiscountKind::Timeslot]);
        assert_eq!(result.discount_breakdown.timeslot_discount, Some(50.0));
    }

    #[test]
    fn test_timeslot_requires_both_times() {
        let config = DiscountConfig {
            timeslot_discounts: vec![timeslot("00:00", "24:00", 50.0)],
            ..Default::default()
        };
        let mut req = BookingPricingRequest::new(100.0, 4.0, 1);
        req.booking_start_time = Some("18:00".to_string());
        let result = calculate_discounted_price(&req, &config).unwrap();

        assert_eq!(result.final_price, 100.0);
        assert!(result.applied_discounts.is_empty());
    }

    #[test]
    fn test_timeslot_first_overlapping_rule_wins() {
        let config = DiscountConfig {
            timeslot_discounts: vec![
                timeslot("10:00", "12:00", 30.0),
                timeslot("bad", "21:00", 40.0),
                timeslot("19:00", "21:00", 20.0),
                timeslot("20:00", "22:00", 50.0),
            ],
            ..Default::default()
        };
        let req = BookingPricingRequest::new(100.0, 4.0, 1).with_time_window("18:00", "22:00");
        let result = calculate_discounted_price(&req, &config).unwrap();

        // 19:00-21:00 rule: 2h of 4h at 20% -> 100 - 10
        assert_eq!(result.final_price, 90.0);
        assert_eq!(result.discount_breakdown.timeslot_discount, Some(20.0));
    }

    #[test]
    fn test_timeslot_no_overlap() {
        let config = DiscountConfig {
            timeslot_discounts: vec![timeslot("08:00", "12:00", 50.0)],
            ..Default::default()
        };
        let req = BookingPricingRequest::new(100.0, 2.0, 1).with_time_window("12:00", "14:00");
        let result = calculate_discounted_price(&req, &config).unwrap();
        assert_eq!(result.final_price, 100.0);
    }

    #[test]
    fn test_malformed_booking_time_skips_timeslot() {
        let config = DiscountConfig {
            timeslot_discounts: vec![timeslot("00:00", "24:00", 50.0)],
            ..Default::default()
        };
        let req = BookingPricingRequest::new(100.0, 2.0, 1).with_time_window("6pm", "8pm");
        let result = calculate_discounted_price(&req, &config).unwrap();
        assert_eq!(result.final_price, 100.0);
    }

    // ========== Stacking ==========

    #[test]
    fn test_overall_and_group_stack_multiplicatively() {
        // 0.9 * 0.9 = 0.81, not 1 - 0.10 - 0.10 = 0.80
        let config = DiscountConfig {
            overall_discount_percent: 10.0,
            group_discounts: vec![group(2, 10.0)],
            ..Default::default()
        };
        let req = BookingPricingRequest::new(100.0, 2.0, 2);
        let result = calculate_discounted_price(&req, &config).unwrap();

        assert_eq!(result.final_price, 81.0);
        assert_eq!(result.total_savings, 19.0);
        assert_eq!(
            result.applied_discounts,
            vec![DiscountKind::Overall, DiscountKind::Group]
        );
    }

    #[test]
    fn test_all_mechanisms_in_order() {
        // 200 * 0.9 = 180
        // free hours (3+1 over 8h -> 6h): 180 * 6/8 = 135
        // group 20%: 108
        // timeslot 2h of 8h at 50%: 108 - 108 * 0.25 * 0.5 = 94.5
        let config = DiscountConfig {
            overall_discount_percent: 10.0,
            group_discounts: vec![group(4, 20.0)],
            timeslot_discounts: vec![timeslot("20:00", "22:00", 50.0)],
            free_hour_discounts: vec![scoped_bundle(3.0, 1.0, "svc-1")],
        };
        let req = BookingPricingRequest::new(200.0, 8.0, 5)
            .with_time_window("14:00", "22:00")
            .with_service_id("svc-1");
        let result = calculate_discounted_price(&req, &config).unwrap();

        assert_eq!(result.final_price, 94.5);
        assert_eq!(result.total_savings, 105.5);
        assert_eq!(result.paid_hours, 6.0);
        assert_eq!(
            result.applied_discounts,
            vec![
                DiscountKind::Overall,
                DiscountKind::FreeHours,
                DiscountKind::Group,
                DiscountKind::Timeslot,
            ]
        );
        assert_eq!(
            result.discount_breakdown,
            DiscountBreakdown {
                overall_discount: Some(10.0),
                free_hours: Some(2.0),
                group_discount: Some(20.0),
                timeslot_discount: Some(50.0),
            }
        );
    }

    // ========== Clamping and precision ==========

    #[test]
    fn test_full_discount_never_negative() {
        let config = DiscountConfig {
            overall_discount_percent: 150.0,
            group_discounts: vec![group(1, 100.0)],
            ..Default::default()
        };
        let req = BookingPricingRequest::new(100.0, 2.0, 1);
        let result = calculate_discounted_price(&req, &config).unwrap();

        assert_eq!(result.final_price, 0.0);
        assert_eq!(result.total_savings, 100.0);
        assert_eq!(result.discount_breakdown.overall_discount, Some(100.0));
    }

    #[test]
    fn test_timeslot_overlap_longer_than_duration_is_capped() {
        // Booking window (4h) inconsistent with the 1h duration
        let config = DiscountConfig {
            timeslot_discounts: vec![timeslot("18:00", "22:00", 100.0)],
            ..Default::default()
        };
        let req = BookingPricingRequest::new(50.0, 1.0, 1).with_time_window("18:00", "22:00");
        let result = calculate_discounted_price(&req, &config).unwrap();
        assert_eq!(result.final_price, 0.0);
        assert_eq!(result.total_savings, 50.0);
    }

    #[test]
    fn test_rounding_to_cents() {
        // 99.99 * 0.67 = 66.9933 -> 66.99
        let config = DiscountConfig {
            overall_discount_percent: 33.0,
            ..Default::default()
        };
        let req = BookingPricingRequest::new(99.99, 1.0, 1);
        let result = calculate_discounted_price(&req, &config).unwrap();
        assert_eq!(result.final_price, 66.99);
        assert_eq!(result.total_savings, 33.0);
    }

    #[test]
    fn test_idempotent() {
        let config = DiscountConfig {
            overall_discount_percent: 12.5,
            group_discounts: vec![group(3, 7.0)],
            timeslot_discounts: vec![timeslot("09:00", "11:00", 15.0)],
            free_hour_discounts: vec![bundle(2.0, 1.0)],
        };
        let req = BookingPricingRequest::new(137.35, 5.0, 4).with_time_window("08:00", "13:00");
        let first = calculate_discounted_price(&req, &config).unwrap();
        let second = calculate_discounted_price(&req, &config).unwrap();
        assert_eq!(first, second);
    }

    // ========== Preconditions ==========

    #[test]
    fn test_invalid_base_price() {
        let config = DiscountConfig::default();
        for price in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            let req = BookingPricingRequest::new(price, 2.0, 1);
            assert!(matches!(
                calculate_discounted_price(&req, &config),
                Err(PricingError::InvalidBasePrice(_))
            ));
        }
    }

    #[test]
    fn test_invalid_duration() {
        let config = DiscountConfig::default();
        let req = BookingPricingRequest::new(100.0, 0.0, 1);
        assert_eq!(
            calculate_discounted_price(&req, &config),
            Err(PricingError::InvalidDuration(0.0))
        );
        let req = BookingPricingRequest::new(100.0, -1.5, 1);
        assert_eq!(
            calculate_discounted_price(&req, &config),
            Err(PricingError::InvalidDuration(-1.5))
        );
    }

    #[test]
    fn test_out_of_range_base_price() {
        let config = DiscountConfig::default();
        for price in [1e30, 1e-30, 0.001, MAX_PRICE + 0.01] {
            let req = BookingPricingRequest::new(price, 2.0, 1);
            assert_eq!(
                calculate_discounted_price(&req, &config),
                Err(PricingError::InvalidBasePrice(price))
            );
        }

        let req = BookingPricingRequest::new(MAX_PRICE, 2.0, 1);
        let result = calculate_discounted_price(&req, &config).unwrap();
        assert_eq!(result.final_price, MAX_PRICE);
        assert_eq!(result.total_savings, 0.0);
    }

    #[test]
    fn test_out_of_range_duration() {
        let config = DiscountConfig {
            timeslot_discounts: vec![timeslot("20:00", "22:00", 50.0)],
            ..Default::default()
        };
        for hours in [1e30, 1e-30, MAX_DURATION_HOURS + 1.0] {
            let req =
                BookingPricingRequest::new(100.0, hours, 1).with_time_window("18:00", "22:00");
            assert_eq!(
                calculate_discounted_price(&req, &config),
                Err(PricingError::InvalidDuration(hours))
            );
        }
    }
}
