//! Response DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::catalog;
use super::models::{Frequency, HourlyRateBand, PricingInput, QuoteBreakdown};

/// Fallback display name when the caller doesn't label the vehicle.
const UNNAMED_VEHICLE: &str = "Unnamed Vehicle";

/// Full quote for a detail job: the resolved inputs plus the calculated
/// breakdown, shaped the way the console's result card presents it.
///
/// Whole-dollar amounts are JSON integers; fractional values (hours,
/// multipliers) are decimal strings.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub vehicle: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub size_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub condition_multiplier: Decimal,
    pub job_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub time_multiplier: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub add_ons_total: Decimal,
    pub client_price: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub estimated_hours: Decimal,
    pub employee_pay: i64,
    pub supplies_cost: i64,
    pub company_profit: i64,
    pub employee_hourly_rate: i64,
    pub meets_hourly_target: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_client_price: Option<i64>,
    pub hourly_rate_band: HourlyRateBand,
}

impl QuoteResponse {
    pub fn new(vehicle: Option<String>, input: &PricingInput, breakdown: &QuoteBreakdown) -> Self {
        let profile = input.schedule.profile();
        Self {
            vehicle: vehicle.unwrap_or_else(|| UNNAMED_VEHICLE.to_string()),
            base_price: input.base_price.amount(),
            size_multiplier: input.size_multiplier,
            condition_multiplier: input.condition_multiplier,
            job_type: input.schedule.as_str(),
            frequency: input.schedule.frequency(),
            price_multiplier: profile.price,
            time_multiplier: profile.time,
            add_ons_total: breakdown.add_ons_total,
            client_price: breakdown.client_price,
            estimated_hours: breakdown.estimated_hours,
            employee_pay: breakdown.employee_pay,
            supplies_cost: breakdown.supplies_cost,
            company_profit: breakdown.company_profit,
            employee_hourly_rate: breakdown.employee_hourly_rate,
            meets_hourly_target: breakdown.meets_hourly_target,
            suggested_client_price: breakdown.suggested_client_price,
            hourly_rate_band: breakdown.hourly_rate_band,
        }
    }
}

/// The fixed catalog, as served to the console.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub packages: Vec<PackageResponse>,
    pub add_ons: Vec<AddOnResponse>,
    pub size_classes: Vec<MultiplierResponse>,
    pub condition_levels: Vec<MultiplierResponse>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageResponse {
    pub name: &'static str,
    pub price: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub base_time_hours: Decimal,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOnResponse {
    pub name: &'static str,
    pub price: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplierResponse {
    pub label: &'static str,
    #[serde(with = "rust_decimal::serde::str")]
    pub multiplier: Decimal,
}

impl CatalogResponse {
    /// Snapshot of the fixed catalog.
    pub fn current() -> Self {
        Self {
            packages: catalog::PACKAGES
                .iter()
                .map(|package| PackageResponse {
                    name: package.name,
                    price: package.price,
                    base_time_hours: package.base_time_hours,
                })
                .collect(),
            add_ons: catalog::ADD_ONS
                .iter()
                .map(|add_on| AddOnResponse {
                    name: add_on.name,
                    price: add_on.price,
                })
                .collect(),
            size_classes: catalog::SIZE_CLASSES
                .iter()
                .map(|size| MultiplierResponse {
                    label: size.label,
                    multiplier: size.multiplier,
                })
                .collect(),
            condition_levels: catalog::CONDITION_LEVELS
                .iter()
                .map(|level| MultiplierResponse {
                    label: level.label,
                    multiplier: level.multiplier,
                })
                .collect(),
        }
    }
}

/// Generic error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::PricingSettings;
    use crate::pricing::requests::{BasePriceSourceRequest, CalculateQuoteRequest};
    use crate::pricing::services::calculate_quote;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_serializes_with_camel_case_wire_names() {
        let request = CalculateQuoteRequest {
            vehicle: None,
            base_price_source: BasePriceSourceRequest::Package { amount: dec!(149) },
            size_multiplier: dec!(1.0),
            condition_multiplier: dec!(1.0),
            job_type: "one_time".to_string(),
            frequency: None,
            add_on_amounts: vec![],
        };
        let quote = calculate_quote(&request, &PricingSettings::default()).unwrap();
        let value = serde_json::to_value(&quote).unwrap();

        assert_eq!(value["vehicle"], "Unnamed Vehicle");
        assert_eq!(value["clientPrice"], 149);
        assert_eq!(value["estimatedHours"], "1.5");
        assert_eq!(value["employeePay"], 60);
        assert_eq!(value["suppliesCost"], 12);
        assert_eq!(value["companyProfit"], 77);
        assert_eq!(value["employeeHourlyRate"], 40);
        assert_eq!(value["meetsHourlyTarget"], false);
        assert_eq!(value["suggestedClientPrice"], 188);
        assert_eq!(value["hourlyRateBand"], "low");
        // One-time jobs have no frequency field at all.
        assert!(value.get("frequency").is_none());
    }

    #[test]
    fn test_quote_omits_suggestion_when_target_met() {
        let request = CalculateQuoteRequest {
            vehicle: Some("F-150".to_string()),
            base_price_source: BasePriceSourceRequest::Custom { amount: dec!(500) },
            size_multiplier: dec!(1.0),
            condition_multiplier: dec!(0.9),
            job_type: "one_time".to_string(),
            frequency: None,
            add_on_amounts: vec![],
        };
        let quote = calculate_quote(&request, &PricingSettings::default()).unwrap();
        let value = serde_json::to_value(&quote).unwrap();

        assert_eq!(value["meetsHourlyTarget"], true);
        assert!(value.get("suggestedClientPrice").is_none());
        assert_eq!(value["hourlyRateBand"], "borderline");
    }

    #[test]
    fn test_catalog_snapshot_matches_fixed_tables() {
        let catalog = CatalogResponse::current();
        assert_eq!(catalog.packages.len(), 3);
        assert_eq!(catalog.add_ons.len(), 6);
        assert_eq!(catalog.size_classes.len(), 4);
        assert_eq!(catalog.condition_levels.len(), 3);

        let value = serde_json::to_value(&catalog).unwrap();
        assert_eq!(value["packages"][0]["name"], "The Base");
        assert_eq!(value["packages"][0]["price"], 149);
        assert_eq!(value["packages"][0]["baseTimeHours"], "1.5");
        assert_eq!(value["addOns"][0]["name"], "Wax");
        assert_eq!(value["sizeClasses"][3]["multiplier"], "1.4");
    }
}
