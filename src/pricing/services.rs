//! Quote orchestration between the wire DTOs and the pure calculator.
//!
//! Routes stay thin: everything from request parsing through calculation
//! to the response shape lives here, along with the error taxonomy.

use rust_decimal::Decimal;

use super::calculators;
use super::models::{BasePriceSource, JobSchedule, PricingInput, PricingSettings};
use super::requests::{BasePriceSourceRequest, CalculateQuoteRequest};
use super::responses::QuoteResponse;

/// Pricing calculation error types.
///
/// Everything except `Configuration` is a client input problem; the
/// calling layer decides how to present it. `Configuration` means the
/// business settings themselves are inconsistent.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PricingError {
    #[error("invalid base price")]
    InvalidBasePrice,

    #[error("missing frequency")]
    MissingFrequency,

    #[error("unrecognized frequency: {0}")]
    UnrecognizedFrequency(String),

    #[error("unrecognized job type: {0}")]
    UnrecognizedJobType(String),

    #[error("negative add-on amount")]
    NegativeAddOn,

    #[error("invalid size multiplier: {0}")]
    InvalidSizeMultiplier(Decimal),

    #[error("invalid condition multiplier: {0}")]
    InvalidConditionMultiplier(Decimal),

    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl PricingError {
    /// Configuration errors are server-side faults; everything else is
    /// input validation.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }
}

/// Build a validated domain input from the wire request.
pub fn build_input(request: &CalculateQuoteRequest) -> Result<PricingInput, PricingError> {
    let base_price = match request.base_price_source {
        BasePriceSourceRequest::Package { amount } => BasePriceSource::Package(amount),
        BasePriceSourceRequest::Custom { amount } => BasePriceSource::Custom(amount),
    };

    let schedule = match request.job_type.as_str() {
        // The console form always carries a frequency selection; a stray
        // one on a one-time job is ignored rather than rejected.
        "one_time" => JobSchedule::OneTime,
        "maintenance" => {
            let raw = request
                .frequency
                .as_deref()
                .ok_or(PricingError::MissingFrequency)?;
            JobSchedule::Maintenance(raw.parse()?)
        }
        other => return Err(PricingError::UnrecognizedJobType(other.to_string())),
    };

    Ok(PricingInput {
        base_price,
        size_multiplier: request.size_multiplier,
        condition_multiplier: request.condition_multiplier,
        schedule,
        add_on_amounts: request.add_on_amounts.clone(),
    })
}

/// Calculate a full quote for the request.
pub fn calculate_quote(
    request: &CalculateQuoteRequest,
    settings: &PricingSettings,
) -> Result<QuoteResponse, PricingError> {
    let input = build_input(request)?;
    let breakdown = calculators::calculate(&input, settings)?;
    Ok(QuoteResponse::new(
        request.vehicle.clone(),
        &input,
        &breakdown,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::Frequency;
    use rust_decimal_macros::dec;

    fn request() -> CalculateQuoteRequest {
        CalculateQuoteRequest {
            vehicle: None,
            base_price_source: BasePriceSourceRequest::Package { amount: dec!(149) },
            size_multiplier: dec!(1.0),
            condition_multiplier: dec!(1.0),
            job_type: "one_time".to_string(),
            frequency: None,
            add_on_amounts: vec![],
        }
    }

    #[test]
    fn test_build_input_one_time_ignores_stray_frequency() {
        let mut req = request();
        req.frequency = Some("weekly".to_string());
        let input = build_input(&req).unwrap();
        assert_eq!(input.schedule, JobSchedule::OneTime);
    }

    #[test]
    fn test_build_input_maintenance_requires_frequency() {
        let mut req = request();
        req.job_type = "maintenance".to_string();
        assert_eq!(
            build_input(&req).unwrap_err(),
            PricingError::MissingFrequency
        );

        req.frequency = Some("monthly".to_string());
        let input = build_input(&req).unwrap();
        assert_eq!(
            input.schedule,
            JobSchedule::Maintenance(Frequency::Monthly)
        );
    }

    #[test]
    fn test_build_input_rejects_unknown_frequency() {
        let mut req = request();
        req.job_type = "maintenance".to_string();
        req.frequency = Some("fortnightly".to_string());
        assert_eq!(
            build_input(&req).unwrap_err(),
            PricingError::UnrecognizedFrequency("fortnightly".to_string())
        );
    }

    #[test]
    fn test_build_input_rejects_unknown_job_type() {
        let mut req = request();
        req.job_type = "recurring".to_string();
        assert_eq!(
            build_input(&req).unwrap_err(),
            PricingError::UnrecognizedJobType("recurring".to_string())
        );
    }

    #[test]
    fn test_calculate_quote_echoes_resolved_inputs() {
        let req = CalculateQuoteRequest {
            vehicle: Some("Mercedes S560".to_string()),
            base_price_source: BasePriceSourceRequest::Package { amount: dec!(399) },
            size_multiplier: dec!(1.2),
            condition_multiplier: dec!(1.0),
            job_type: "maintenance".to_string(),
            frequency: Some("monthly".to_string()),
            add_on_amounts: vec![dec!(40)],
        };
        let quote = calculate_quote(&req, &PricingSettings::default()).unwrap();

        assert_eq!(quote.vehicle, "Mercedes S560");
        assert_eq!(quote.base_price, dec!(399));
        assert_eq!(quote.job_type, "maintenance");
        assert_eq!(quote.frequency, Some(Frequency::Monthly));
        assert_eq!(quote.price_multiplier, dec!(0.75));
        assert_eq!(quote.time_multiplier, dec!(0.85));
        assert_eq!(quote.add_ons_total, dec!(40));
        assert_eq!(quote.client_price, 399);
        assert_eq!(quote.estimated_hours, dec!(5.1));
    }

    #[test]
    fn test_calculate_quote_defaults_vehicle_label() {
        let quote = calculate_quote(&request(), &PricingSettings::default()).unwrap();
        assert_eq!(quote.vehicle, "Unnamed Vehicle");
        assert_eq!(quote.suggested_client_price, Some(188));
    }

    #[test]
    fn test_calculate_quote_propagates_validation_errors() {
        let mut req = request();
        req.base_price_source = BasePriceSourceRequest::Custom { amount: dec!(0) };
        assert_eq!(
            calculate_quote(&req, &PricingSettings::default()).unwrap_err(),
            PricingError::InvalidBasePrice
        );
    }
}
