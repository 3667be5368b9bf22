//! HTTP API
//!
//! - [`health`] - liveness
//! - [`pricing`] - discount, guest price and booking quote endpoints

pub mod health;
pub mod pricing;
