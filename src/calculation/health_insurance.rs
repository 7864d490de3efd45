//! Health-insurance contribution calculation.
//!
//! A flat percentage of gross pay with no cap and no floor.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::FlatRate;
use crate::error::{EngineError, EngineResult};

/// Computes the health-insurance contribution for a gross pay.
///
/// The result is rounded to 2 decimal places (half-up).
///
/// # Errors
///
/// Returns `InvalidGrossPay` for negative gross pay.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::health_insurance;
/// use payroll_engine::config::FlatRate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = FlatRate { rate: Decimal::from_str("0.04").unwrap() };
/// let amount = health_insurance(Decimal::from(4625), &rate).unwrap();
/// assert_eq!(amount, Decimal::from_str("185.00").unwrap());
/// ```
pub fn health_insurance(gross_pay: Decimal, rate: &FlatRate) -> EngineResult<Decimal> {
    if gross_pay < Decimal::ZERO {
        return Err(EngineError::InvalidGrossPay { amount: gross_pay });
    }

    Ok((gross_pay * rate.rate)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
