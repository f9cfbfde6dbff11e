//! Quote engine for the Buffer Bros vehicle-detailing service.
//!
//! The calculator itself is a pure function (`pricing::calculate`); the
//! rest of the crate wraps it in a small HTTP/JSON API consumed by the
//! admin console.

pub mod config;
pub mod error;
pub mod pricing;

use std::sync::Arc;

pub use config::AppConfig;
pub use error::{AppError, Result};

use pricing::PricingSettings;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<PricingSettings>,
}

impl AppState {
    pub fn new(settings: PricingSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }
}
