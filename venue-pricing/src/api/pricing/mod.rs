//! Pricing API
//!
//! | Path | Method | Body |
//! |------|--------|------|
//! | /api/pricing/discounts | POST | booking request + raw service record |
//! | /api/pricing/guest-price | POST | service type + guest tiers + party size |
//! | /api/pricing/quote | POST | full booking quote request |
//! | /api/pricing/describe | POST | raw service record |

mod handler;

pub use handler::{DiscountQuery, GuestPriceQuery, GuestPriceResponse};

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/pricing", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/discounts", post(handler::discounts))
        .route("/guest-price", post(handler::guest_price))
        .route("/quote", post(handler::quote))
        .route("/describe", post(handler::describe))
}
