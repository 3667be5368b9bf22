//! Booking Quote
//!
//! Authoritative price of a booking, as persisted in `total_price`:
//! guest-count unit price -> scaled by duration -> discounts.

use shared::models::{BookingPricingRequest, BookingQuote, BookingQuoteRequest, PricingMode};

use super::config_resolver::resolve_discount_config;
use super::discount_calculator::calculate_discounted_price;
use super::error::PricingError;
use super::guest_pricing::resolve_guest_price;
use super::money::{
    MAX_DURATION_HOURS, MAX_PRICE, MIN_DURATION_HOURS, MIN_PRICE, round_money,
    to_bounded_decimal, to_f64, to_f64_exact,
};
use super::time_window::TimeWindow;

/// Booking duration in hours: explicit value, else the time window length
pub fn booking_duration(request: &BookingQuoteRequest) -> Result<f64, PricingError> {
    if let Some(hours) = request.duration_hours {
        to_bounded_decimal(hours, MIN_DURATION_HOURS, MAX_DURATION_HOURS)
            .ok_or(PricingError::InvalidDuration(hours))?;
        return Ok(hours);
    }

    let (Some(start), Some(end)) = (
        request.booking_start_time.as_deref(),
        request.booking_end_time.as_deref(),
    ) else {
        return Err(PricingError::InvalidDuration(0.0));
    };

    let window = TimeWindow::parse(start, end).filter(|w| w.minutes() > 0);
    match window {
        Some(window) => Ok(to_f64_exact(window.hours())),
        None => Err(PricingError::InvalidTimeWindow {
            start: start.to_string(),
            end: end.to_string(),
        }),
    }
}

/// Build the full quote for a booking
///
/// # Arguments
/// * `request` - Service record plus booking intent
/// * `per_table_types` - Service types charged per table rather than per guest
pub fn build_booking_quote<S: AsRef<str>>(
    request: &BookingQuoteRequest,
    per_table_types: &[S],
) -> Result<BookingQuote, PricingError> {
    let service = &request.service;
    let duration_hours = booking_duration(request)?;

    let pricing_mode = PricingMode::for_service_type(&service.service_type, per_table_types);
    let unit_price = resolve_guest_price(
        pricing_mode,
        service.price,
        &service.guest_pricing_rules,
        request.guest_count,
    )?;

    // Both factors are bounded, so the product cannot overflow
    let unit = to_bounded_decimal(unit_price, MIN_PRICE, MAX_PRICE)
        .ok_or(PricingError::InvalidBasePrice(unit_price))?;
    let hours = to_bounded_decimal(duration_hours, MIN_DURATION_HOURS, MAX_DURATION_HOURS)
        .ok_or(PricingError::InvalidDuration(duration_hours))?;
    let base_price = round_money(unit * hours);

    let mut pricing_request =
        BookingPricingRequest::new(to_f64(base_price), duration_hours, request.guest_count);
    pricing_request.booking_start_time = request.booking_start_time.clone();
    pricing_request.booking_end_time = request.booking_end_time.clone();
    pricing_request.service_id = service.id.clone();

    let config = resolve_discount_config(&service.discount_fields());
    let pricing = calculate_discounted_price(&pricing_request, &config)?;

    tracing::info!(
        service_id = service.id.as_deref().unwrap_or("-"),
        mode = ?pricing_mode,
        unit_price,
        duration_hours,
        guest_count = request.guest_count,
        original_price = pricing.original_price,
        final_price = pricing.final_price,
        "Booking quote computed"
    );

    Ok(BookingQuote {
        service_id: service.id.clone(),
        service_name: service.name.clone(),
        pricing_mode,
        unit_price,
        duration_hours,
        guest_count: request.guest_count,
        pricing,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shared::models::DiscountKind;

    const PER_TABLE: [&str; 2] = ["billiards", "table_tennis"];

    fn quote_request(service: serde_json::Value, guests: u32) -> BookingQuoteRequest {
        serde_json::from_value(json!({
            "service": service,
            "guest_count": guests,
        }))
        .unwrap()
    }

    #[test]
    fn test_duration_from_window() {
        let mut req = quote_request(json!({"service_type": "ps5", "price": 10}), 1);
        req.booking_start_time = Some("18:00".to_string());
        req.booking_end_time = Some("20:30".to_string());
        assert_eq!(booking_duration(&req), Ok(2.5));
    }

    #[test]
    fn test_explicit_duration_wins() {
        let mut req = quote_request(json!({"service_type": "ps5", "price": 10}), 1);
        req.duration_hours = Some(3.0);
        req.booking_start_time = Some("18:00".to_string());
        req.booking_end_time = Some("19:00".to_string());
        assert_eq!(booking_duration(&req), Ok(3.0));
    }

    #[test]
    fn test_duration_errors() {
        let req = quote_request(json!({"service_type": "ps5", "price": 10}), 1);
        assert_eq!(
            booking_duration(&req),
            Err(PricingError::InvalidDuration(0.0))
        );

        let mut req = quote_request(json!({"service_type": "ps5", "price": 10}), 1);
        req.booking_start_time = Some("20:00".to_string());
        req.booking_end_time = Some("19:00".to_string());
        assert_eq!(
            booking_duration(&req),
            Err(PricingError::InvalidTimeWindow {
                start: "20:00".to_string(),
                end: "19:00".to_string(),
            })
        );

        let mut req = quote_request(json!({"service_type": "ps5", "price": 10}), 1);
        req.duration_hours = Some(-2.0);
        assert_eq!(
            booking_duration(&req),
            Err(PricingError::InvalidDuration(-2.0))
        );

        let mut req = quote_request(json!({"service_type": "ps5", "price": 10}), 1);
        req.duration_hours = Some(1e10);
        assert_eq!(
            booking_duration(&req),
            Err(PricingError::InvalidDuration(1e10))
        );
    }

    #[test]
    fn test_huge_values_rejected_before_arithmetic() {
        let mut req = quote_request(json!({"service_type": "billiards", "price": 1e20}), 2);
        req.duration_hours = Some(1e10);
        assert_eq!(
            build_booking_quote(&req, &PER_TABLE),
            Err(PricingError::InvalidDuration(1e10))
        );

        req.duration_hours = Some(2.0);
        assert_eq!(
            build_booking_quote(&req, &PER_TABLE),
            Err(PricingError::InvalidBasePrice(1e20))
        );

        // Per-guest flat rate times party size beyond the price ceiling
        let mut req = quote_request(json!({"service_type": "ps5", "price": 7e28}), 3);
        req.duration_hours = Some(1.0);
        assert!(matches!(
            build_booking_quote(&req, &PER_TABLE),
            Err(PricingError::InvalidBasePrice(_))
        ));
    }

    #[test]
    fn test_per_table_quote() {
        let mut req = quote_request(
            json!({
                "id": "table-1",
                "name": "Snooker Table 1",
                "service_type": "billiards",
                "price": 20,
                "overall_discount_percent": 10
            }),
            6,
        );
        req.duration_hours = Some(2.0);
        let quote = build_booking_quote(&req, &PER_TABLE).unwrap();

        assert_eq!(quote.pricing_mode, PricingMode::PerTable);
        assert_eq!(quote.service_name.as_deref(), Some("Snooker Table 1"));
        assert_eq!(quote.unit_price, 20.0);
        assert_eq!(quote.pricing.original_price, 40.0);
        assert_eq!(quote.total_price(), 36.0);
    }

    #[test]
    fn test_per_guest_quote_with_all_discounts() {
        let mut req = quote_request(
            json!({
                "id": "svc-vr",
                "service_type": "vr",
                "price": 99,
                "guest_pricing_rules": [
                    {"max_guests": 2, "price": 20},
                    {"max_guests": 6, "price": 30}
                ],
                "free_hour_discounts": [{"threshold_hours": 3, "free_hours": 1, "service_ids": ["svc-vr"]}],
                "group_discounts": [{"min_guests": 4, "discount_percent": 20}],
                "timeslot_discounts": [{"start": "20:00", "end": "22:00", "discount_percent": 50}],
                "overall_discount_percent": "10"
            }),
            5,
        );
        req.booking_start_time = Some("14:00".to_string());
        req.booking_end_time = Some("22:00".to_string());
        let quote = build_booking_quote(&req, &PER_TABLE).unwrap();

        // 30/h * 8h = 240 -> 216 -> 162 -> 129.6 -> 129.6 - 16.2 = 113.4
        assert_eq!(quote.pricing_mode, PricingMode::PerGuest);
        assert_eq!(quote.unit_price, 30.0);
        assert_eq!(quote.duration_hours, 8.0);
        assert_eq!(quote.pricing.original_price, 240.0);
        assert_eq!(quote.pricing.final_price, 113.4);
        assert_eq!(quote.pricing.paid_hours, 6.0);
        assert_eq!(quote.pricing.applied_discounts.len(), 4);
        assert_eq!(quote.pricing.applied_discounts[1], DiscountKind::FreeHours);
    }

    #[test]
    fn test_party_too_large() {
        let mut req = quote_request(
            json!({
                "service_type": "karaoke",
                "price": 15,
                "guest_pricing_rules": [{"max_guests": 4, "price": 40}]
            }),
            9,
        );
        req.duration_hours = Some(1.0);
        assert_eq!(
            build_booking_quote(&req, &PER_TABLE),
            Err(PricingError::NoApplicablePrice { guest_count: 9 })
        );
    }

    #[test]
    fn test_malformed_discounts_still_quote() {
        let mut req = quote_request(
            json!({
                "service_type": "ps5",
                "price": 12.5,
                "group_discounts": "none",
                "timeslot_discounts": [{"start": "noon"}]
            }),
            2,
        );
        req.duration_hours = Some(2.0);
        let quote = build_booking_quote(&req, &PER_TABLE).unwrap();
        // Legacy flat rate: 12.5 * 2 guests = 25/h, 2h
        assert_eq!(quote.unit_price, 25.0);
        assert_eq!(quote.total_price(), 50.0);
        assert!(!quote.pricing.has_discount());
    }
}
