//! Domain types for quote calculation.
//!
//! Everything here is a value object - nothing is persisted. A
//! `PricingInput` is built per request, run through the calculator, and
//! dropped with its `QuoteBreakdown`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::services::PricingError;

/// Where the base price comes from: a catalog package or a custom amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BasePriceSource {
    /// One of the fixed catalog packages (149 / 249 / 399).
    Package(Decimal),
    /// Custom-quoted base amount for jobs outside the packages.
    Custom(Decimal),
}

impl BasePriceSource {
    /// The base price amount, regardless of source.
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Package(amount) | Self::Custom(amount) => *amount,
        }
    }
}

/// Maintenance visit cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Biweekly,
    Monthly,
    Occasional,
}

impl Frequency {
    /// Price/time multipliers for this cadence. Fixed table, never mutated:
    /// the more often a vehicle is maintained, the cheaper and faster each
    /// visit gets.
    pub fn profile(&self) -> FrequencyProfile {
        match self {
            Self::Weekly => FrequencyProfile {
                price: dec!(0.40),
                time: dec!(0.50),
            },
            Self::Biweekly => FrequencyProfile {
                price: dec!(0.55),
                time: dec!(0.65),
            },
            Self::Monthly => FrequencyProfile {
                price: dec!(0.75),
                time: dec!(0.85),
            },
            Self::Occasional => FrequencyProfile {
                price: dec!(0.90),
                time: dec!(1.00),
            },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Occasional => "occasional",
        }
    }
}

impl std::str::FromStr for Frequency {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            "occasional" => Ok(Self::Occasional),
            other => Err(PricingError::UnrecognizedFrequency(other.to_string())),
        }
    }
}

/// Price and time multipliers applied by the job schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyProfile {
    pub price: Decimal,
    pub time: Decimal,
}

impl FrequencyProfile {
    /// One-time jobs: no discount, no time reduction.
    pub const ONE_TIME: FrequencyProfile = FrequencyProfile {
        price: Decimal::ONE,
        time: Decimal::ONE,
    };
}

/// Job schedule. A maintenance job always carries its cadence; a one-time
/// job never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobSchedule {
    OneTime,
    Maintenance(Frequency),
}

impl JobSchedule {
    pub fn profile(&self) -> FrequencyProfile {
        match self {
            Self::OneTime => FrequencyProfile::ONE_TIME,
            Self::Maintenance(frequency) => frequency.profile(),
        }
    }

    pub fn frequency(&self) -> Option<Frequency> {
        match self {
            Self::OneTime => None,
            Self::Maintenance(frequency) => Some(*frequency),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneTime => "one_time",
            Self::Maintenance(_) => "maintenance",
        }
    }
}

/// Input to a quote calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct PricingInput {
    pub base_price: BasePriceSource,
    pub size_multiplier: Decimal,
    pub condition_multiplier: Decimal,
    pub schedule: JobSchedule,
    pub add_on_amounts: Vec<Decimal>,
}

/// Business constants for the revenue split and the hourly-rate check.
///
/// Validated once at startup; `calculate` trusts them afterwards.
#[derive(Debug, Clone)]
pub struct PricingSettings {
    pub employee_share: Decimal,
    pub supplies_share: Decimal,
    pub company_share: Decimal,
    /// Every job should pay the employee at least this much per hour.
    pub minimum_employee_hourly_rate: Decimal,
    /// At or above this rate the job is comfortably profitable for the
    /// employee.
    pub healthy_employee_hourly_rate: Decimal,
    /// Base labor time when the base price matches no catalog package.
    pub default_base_time_hours: Decimal,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            employee_share: dec!(0.40),
            supplies_share: dec!(0.08),
            company_share: dec!(0.52),
            minimum_employee_hourly_rate: dec!(50),
            healthy_employee_hourly_rate: dec!(70),
            default_base_time_hours: dec!(3.0),
        }
    }
}

impl PricingSettings {
    /// Check the settings are internally consistent.
    ///
    /// `company_share` is never used when computing a quote (profit is a
    /// remainder); it exists so this check can hold the split to exactly
    /// 100% of the client price.
    pub fn validate(&self) -> Result<(), PricingError> {
        let mut errors = Vec::new();

        if self.employee_share <= Decimal::ZERO || self.employee_share >= Decimal::ONE {
            errors.push("employee_share must be strictly between 0 and 1".to_string());
        }
        if self.supplies_share < Decimal::ZERO || self.supplies_share >= Decimal::ONE {
            errors.push("supplies_share must be between 0 and 1".to_string());
        }
        if self.employee_share + self.supplies_share + self.company_share != Decimal::ONE {
            errors.push("revenue shares must sum to exactly 1.0".to_string());
        }
        if self.minimum_employee_hourly_rate <= Decimal::ZERO {
            errors.push("minimum_employee_hourly_rate must be positive".to_string());
        }
        if self.healthy_employee_hourly_rate < self.minimum_employee_hourly_rate {
            errors.push("healthy_employee_hourly_rate must not be below the minimum".to_string());
        }
        if self.default_base_time_hours <= Decimal::ZERO {
            errors.push("default_base_time_hours must be positive".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(PricingError::Configuration {
                message: errors.join("; "),
            })
        }
    }
}

/// Health band for the employee hourly rate, as shown on the quote card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HourlyRateBand {
    Healthy,
    Borderline,
    Low,
}

impl HourlyRateBand {
    pub fn for_rate(rate: Decimal, settings: &PricingSettings) -> Self {
        if rate >= settings.healthy_employee_hourly_rate {
            Self::Healthy
        } else if rate >= settings.minimum_employee_hourly_rate {
            Self::Borderline
        } else {
            Self::Low
        }
    }
}

/// Full quote breakdown produced by the calculator.
///
/// Currency amounts are whole dollars; `estimated_hours` carries one
/// decimal place. `suggested_client_price` is set only when the hourly
/// target is missed.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteBreakdown {
    pub client_price: i64,
    pub estimated_hours: Decimal,
    pub add_ons_total: Decimal,
    pub employee_pay: i64,
    pub supplies_cost: i64,
    pub company_profit: i64,
    pub employee_hourly_rate: i64,
    pub meets_hourly_target: bool,
    pub suggested_client_price: Option<i64>,
    pub hourly_rate_band: HourlyRateBand,
}
