//! Core pricing calculation functions.
//!
//! Pure functions for quote math - no database access, no I/O. A quote is
//! computed in a single pass from the validated input and the business
//! settings; identical inputs always produce identical quotes.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::catalog;
use super::models::{
    BasePriceSource, HourlyRateBand, PricingInput, PricingSettings, QuoteBreakdown,
};
use super::services::PricingError;

/// Estimates never drop below half an hour; the floor is applied after
/// rounding.
const MIN_ESTIMATED_HOURS: Decimal = dec!(0.5);

/// Round to a whole currency amount, ties away from zero.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use bufferbros_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5)), dec!(3));
/// assert_eq!(round_money(dec!(399.1)), dec!(399));
/// assert_eq!(round_money(dec!(59.6)), dec!(60));
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a time estimate to one decimal place, ties away from zero.
pub fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Calculate a full quote breakdown.
///
/// Validates the input, then derives the client price, the time estimate,
/// the revenue split and the employee hourly-rate check in one pass.
/// Nothing is computed on invalid input; the first failed check aborts
/// the whole calculation.
pub fn calculate(
    input: &PricingInput,
    settings: &PricingSettings,
) -> Result<QuoteBreakdown, PricingError> {
    validate(input)?;

    let base_price = input.base_price.amount();
    let profile = input.schedule.profile();

    let add_ons_total: Decimal = input.add_on_amounts.iter().copied().sum();

    // Client price: multiplicative factors on the base, add-ons on top.
    let client_price = round_money(
        base_price * input.size_multiplier * input.condition_multiplier * profile.price
            + add_ons_total,
    );

    // Time estimate. Base time is resolved by exact price value, so a
    // custom quote equal to a package price reuses that package's time.
    let base_time =
        catalog::base_time_for_price(base_price).unwrap_or(settings.default_base_time_hours);
    let estimated_hours = round_hours(
        base_time * input.size_multiplier * input.condition_multiplier * profile.time,
    )
    .max(MIN_ESTIMATED_HOURS);

    // Revenue split. Profit is the remainder, so the three parts always
    // sum exactly to the client price despite independent rounding.
    let employee_pay = round_money(client_price * settings.employee_share);
    let supplies_cost = round_money(client_price * settings.supplies_share);
    let company_profit = client_price - employee_pay - supplies_cost;

    let employee_hourly_rate = round_money(employee_pay / estimated_hours);
    let meets_hourly_target = employee_hourly_rate >= settings.minimum_employee_hourly_rate;

    // What the client price would need to be for the employee share to
    // clear the hourly minimum over the estimated time.
    let required_client_hourly = settings.minimum_employee_hourly_rate / settings.employee_share;
    let suggested_client_price = (required_client_hourly * estimated_hours).ceil();

    // A suggestion must raise the price. Anything else means the hourly
    // minimum and the employee share disagree with each other.
    if !meets_hourly_target && suggested_client_price < client_price {
        return Err(PricingError::Configuration {
            message: format!(
                "suggested price {} is below client price {}; check minimum_employee_hourly_rate against employee_share",
                suggested_client_price, client_price
            ),
        });
    }

    let hourly_rate_band = HourlyRateBand::for_rate(employee_hourly_rate, settings);

    Ok(QuoteBreakdown {
        client_price: to_amount(client_price)?,
        estimated_hours,
        add_ons_total,
        employee_pay: to_amount(employee_pay)?,
        supplies_cost: to_amount(supplies_cost)?,
        company_profit: to_amount(company_profit)?,
        employee_hourly_rate: to_amount(employee_hourly_rate)?,
        meets_hourly_target,
        suggested_client_price: if meets_hourly_target {
            None
        } else {
            Some(to_amount(suggested_client_price)?)
        },
        hourly_rate_band,
    })
}

fn validate(input: &PricingInput) -> Result<(), PricingError> {
    match input.base_price {
        BasePriceSource::Package(amount) => {
            if !catalog::is_package_price(amount) {
                return Err(PricingError::InvalidBasePrice);
            }
        }
        BasePriceSource::Custom(amount) => {
            if amount <= Decimal::ZERO {
                return Err(PricingError::InvalidBasePrice);
            }
        }
    }

    if !catalog::is_size_multiplier(input.size_multiplier) {
        return Err(PricingError::InvalidSizeMultiplier(input.size_multiplier));
    }
    if !catalog::is_condition_multiplier(input.condition_multiplier) {
        return Err(PricingError::InvalidConditionMultiplier(
            input.condition_multiplier,
        ));
    }
    if input
        .add_on_amounts
        .iter()
        .any(|amount| *amount < Decimal::ZERO)
    {
        return Err(PricingError::NegativeAddOn);
    }

    Ok(())
}

// Rounded amounts are whole; this only fails for magnitudes that don't
// fit an i64.
fn to_amount(value: Decimal) -> Result<i64, PricingError> {
    value.to_i64().ok_or_else(|| PricingError::Configuration {
        message: format!("amount {} exceeds the supported range", value),
    })
}
