//! Venue Pricing - discount and guest-count pricing for hourly venue bookings
//!
//! # Overview
//!
//! - **Pricing** (`pricing`): discount resolver, guest-count resolver,
//!   discount engine and booking quotes
//! - **HTTP API** (`api`, `routes`): axum endpoints over the pricing module
//! - **Core** (`core`): configuration, state, server
//!
//! # Layout
//!
//! ```text
//! venue-pricing/src/
//! ├── core/          # config, state, server, errors
//! ├── pricing/       # pricing engine (no I/O)
//! ├── api/           # HTTP handlers
//! ├── routes/        # router + middleware
//! └── utils/         # logger, error re-exports
//! ```

pub mod api;
pub mod core;
pub mod pricing;
pub mod routes;
pub mod utils;

pub use core::{Config, Server, ServerError, ServerState};
pub use pricing::{PricingError, build_booking_quote, calculate_discounted_price};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::init_logger_with_file;

/// Load `.env`, read configuration and initialize logging
pub fn setup_environment() -> Config {
    // A missing .env is normal in production
    let dotenv_loaded = dotenv::dotenv().is_ok();

    let config = Config::from_env();
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    );

    if dotenv_loaded {
        tracing::debug!("Loaded .env");
    }
    config
}

pub fn print_banner() {
    println!(
        r#"
 _    __                          ____       _      _
| |  / /__  ____  __  _____      / __ \_____(_)____(_)___  ____ _
| | / / _ \/ __ \/ / / / _ \    / /_/ / ___/ / ___/ / __ \/ __ `/
| |/ /  __/ / / / /_/ /  __/   / ____/ /  / / /__/ / / / / /_/ /
|___/\___/_/ /_/\__,_/\___/   /_/   /_/  /_/\___/_/_/ /_/\__, /
                                                        /____/
    "#
    );
}
