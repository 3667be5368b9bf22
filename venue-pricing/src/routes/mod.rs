use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::core::ServerState;

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        // Health API - public
        .merge(api::health::router())
        // Pricing API - public, stateless
        .merge(api::pricing::router())
}

/// Build the application with middleware
///
/// Used by the HTTP server and by router tests
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // CORS - booking form runs on another origin
        .layer(CorsLayer::permissive())
        // Timeout - 408 when a request exceeds REQUEST_TIMEOUT_MS
        .layer(TimeoutLayer::new(Duration::from_millis(
            state.config.request_timeout_ms,
        )))
        // Trace - request spans at INFO
        .layer(TraceLayer::new_for_http())
}
