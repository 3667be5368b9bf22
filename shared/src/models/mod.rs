//! Data models
//!
//! Shared between the pricing engine, the HTTP layer and clients.

pub mod booking;
pub mod discount;
pub mod service;

pub use booking::*;
pub use discount::*;
pub use service::*;
