//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Request to calculate a quote.
///
/// `jobType` and `frequency` arrive as raw strings and are resolved to
/// domain types during validation, so a bad value surfaces as a pricing
/// validation error rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateQuoteRequest {
    /// Optional display name, echoed back on the quote.
    #[serde(default)]
    pub vehicle: Option<String>,
    pub base_price_source: BasePriceSourceRequest,
    pub size_multiplier: Decimal,
    pub condition_multiplier: Decimal,
    pub job_type: String,
    /// Required for maintenance jobs, ignored otherwise.
    #[serde(default)]
    pub frequency: Option<String>,
    #[serde(default)]
    pub add_on_amounts: Vec<Decimal>,
}

/// Base price selection: a catalog package or a custom amount.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BasePriceSourceRequest {
    Package { amount: Decimal },
    Custom { amount: Decimal },
}
