//! Social-insurance contribution lookup.
//!
//! The contribution is a piecewise-constant step table keyed by gross-pay
//! bracket: brackets are contiguous, upper-bound-inclusive, and the last
//! bracket is unbounded, so every non-negative gross pay maps to exactly
//! one step.

use rust_decimal::Decimal;

use crate::config::StepTable;
use crate::error::{EngineError, EngineResult};

/// Looks up the social-insurance contribution for a gross pay.
///
/// Gross pay exactly on a bracket boundary belongs to that (lower) bracket.
///
/// # Errors
///
/// Returns `InvalidGrossPay` for negative gross pay. A table loaded through
/// [`ConfigLoader`](crate::config::ConfigLoader) is validated to be total,
/// so the lookup itself cannot miss.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::social_insurance;
/// use payroll_engine::config::{ContributionStep, StepTable};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = StepTable {
///     brackets: vec![
///         ContributionStep { up_to: Some(Decimal::from(3250)), amount: Decimal::from_str("135.00").unwrap() },
///         ContributionStep { up_to: None, amount: Decimal::from_str("630.00").unwrap() },
///     ],
/// };
/// let amount = social_insurance(Decimal::from(3000), &table).unwrap();
/// assert_eq!(amount, Decimal::from_str("135.00").unwrap());
/// ```
pub fn social_insurance(gross_pay: Decimal, table: &StepTable) -> EngineResult<Decimal> {
    if gross_pay < Decimal::ZERO {
        return Err(EngineError::InvalidGrossPay { amount: gross_pay });
    }

    for step in &table.brackets {
        match step.up_to {
            Some(bound) if gross_pay <= bound => return Ok(step.amount),
            Some(_) => continue,
            None => return Ok(step.amount),
        }
    }

    // Reachable only for a table that bypassed validation.
    Err(EngineError::InvalidTable {
        table: "social_insurance".to_string(),
        message: format!("no bracket covers gross pay {gross_pay}"),
    })
}
