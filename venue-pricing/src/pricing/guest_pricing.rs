//! Guest-Count Pricing
//!
//! Resolves a service's unit price for a party size:
//! - Per-table services charge a flat rate, guest count ignored
//! - Per-guest services without tiers use `price * guests` (legacy flat rate)
//! - Per-guest services with tiers use the tightest tier that fits the party

use rust_decimal::prelude::*;
use shared::models::{GuestPricingRule, PricingMode};

use super::error::PricingError;
use super::money::{to_decimal, to_f64};

/// Tiers usable for pricing, sorted by capacity then price
///
/// Tiers with a non-finite or negative price are dropped. Equal capacities
/// sort cheapest first, so the lower price wins a tie.
fn sorted_tiers(rules: &[GuestPricingRule]) -> Vec<&GuestPricingRule> {
    let mut tiers: Vec<&GuestPricingRule> = rules
        .iter()
        .filter(|r| r.price.is_finite() && r.price >= 0.0)
        .collect();
    tiers.sort_by(|a, b| {
        a.max_guests
            .cmp(&b.max_guests)
            .then_with(|| a.price.total_cmp(&b.price))
    });
    tiers
}

/// Select the tier for a party: first (smallest) tier whose capacity fits
pub fn select_guest_tier(
    rules: &[GuestPricingRule],
    guest_count: u32,
) -> Option<&GuestPricingRule> {
    sorted_tiers(rules)
        .into_iter()
        .find(|r| r.max_guests >= guest_count)
}

/// Resolve the unit price of a booking for the given party size
///
/// # Errors
/// - [`PricingError::InvalidGuestCount`] for a per-guest service and 0 guests
/// - [`PricingError::NoApplicablePrice`] when tiers exist but none fits the party
/// - [`PricingError::InvalidBasePrice`] when the flat rate times the party overflows
pub fn resolve_guest_price(
    mode: PricingMode,
    base_price_per_unit: f64,
    rules: &[GuestPricingRule],
    guest_count: u32,
) -> Result<f64, PricingError> {
    if mode == PricingMode::PerTable {
        return Ok(base_price_per_unit);
    }

    if guest_count == 0 {
        return Err(PricingError::InvalidGuestCount(guest_count));
    }

    if rules.is_empty() {
        let total = to_decimal(base_price_per_unit)
            .checked_mul(Decimal::from(guest_count))
            .ok_or(PricingError::InvalidBasePrice(base_price_per_unit))?;
        return Ok(to_f64(total));
    }

    match select_guest_tier(rules, guest_count) {
        Some(tier) => Ok(tier.price),
        None => {
            tracing::debug!(
                guest_count,
                tiers = rules.len(),
                "No guest pricing tier accommodates party"
            );
            Err(PricingError::NoApplicablePrice { guest_count })
        }
    }
}
