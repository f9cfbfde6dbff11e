//! Pricing engine module for the detailing business.
//!
//! Deterministic quote calculations for detail jobs: package or custom
//! base price, size and condition multipliers, maintenance cadence
//! discounts, add-ons, the revenue split and the employee hourly-rate
//! health check. The admin console calls this module via HTTP/JSON.

pub mod calculators;
pub mod catalog;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{calculate, round_hours, round_money};
pub use models::{PricingInput, PricingSettings, QuoteBreakdown};
pub use routes::router;
pub use services::{calculate_quote, PricingError};
