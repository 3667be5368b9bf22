//! Pricing API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared::models::{
    BookingPricingRequest, BookingQuote, BookingQuoteRequest, DiscountCalculationResult,
    GuestPricingRule, PricingMode,
};

use crate::core::ServerState;
use crate::pricing::{
    build_booking_quote, calculate_discounted_price, resolve_discount_config, resolve_guest_price,
};
use crate::utils::{ApiResponse, AppResult, ok, ok_with_message};

/// Body of `POST /api/pricing/discounts`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountQuery {
    pub request: BookingPricingRequest,
    /// Raw service record; only its discount fields are read
    #[serde(default)]
    pub service: Value,
}

/// Body of `POST /api/pricing/guest-price`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestPriceQuery {
    pub service_type: String,
    pub base_price_per_unit: f64,
    #[serde(default)]
    pub guest_pricing_rules: Vec<GuestPricingRule>,
    pub guest_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestPriceResponse {
    pub price: f64,
    pub mode: PricingMode,
}

/// POST /api/pricing/discounts - apply a service's discounts to one booking
pub async fn discounts(
    payload: Result<Json<DiscountQuery>, JsonRejection>,
) -> AppResult<Json<ApiResponse<DiscountCalculationResult>>> {
    let Json(payload) = payload?;
    let config = resolve_discount_config(&payload.service);
    let result = calculate_discounted_price(&payload.request, &config)?;
    Ok(ok(result))
}

/// POST /api/pricing/guest-price - unit price for a party size
pub async fn guest_price(
    State(state): State<ServerState>,
    payload: Result<Json<GuestPriceQuery>, JsonRejection>,
) -> AppResult<Json<ApiResponse<GuestPriceResponse>>> {
    let Json(payload) = payload?;
    let mode =
        PricingMode::for_service_type(&payload.service_type, state.per_table_service_types());
    let price = resolve_guest_price(
        mode,
        payload.base_price_per_unit,
        &payload.guest_pricing_rules,
        payload.guest_count,
    )?;
    Ok(ok(GuestPriceResponse { price, mode }))
}

/// POST /api/pricing/quote - authoritative booking price
pub async fn quote(
    State(state): State<ServerState>,
    payload: Result<Json<BookingQuoteRequest>, JsonRejection>,
) -> AppResult<Json<ApiResponse<BookingQuote>>> {
    let Json(payload) = payload?;
    let quote = build_booking_quote(&payload, state.per_table_service_types())?;
    Ok(ok(quote))
}

/// POST /api/pricing/describe - human readable list of configured discounts
pub async fn describe(
    service: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<ApiResponse<Vec<String>>>> {
    let Json(service) = service?;
    let lines = resolve_discount_config(&service).describe();
    let message = format!("{} discount rule(s)", lines.len());
    Ok(ok_with_message(lines, message))
}
