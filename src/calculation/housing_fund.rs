//! Housing-fund contribution calculation.
//!
//! A percentage of gross pay whose rate varies by gross-pay band, with the
//! result capped at a fixed maximum. The cap is the dominant invariant:
//! whatever the band says, the contribution never exceeds it.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::BandedRate;
use crate::error::{EngineError, EngineResult};

/// Computes the housing-fund contribution for a gross pay.
///
/// Gross pay below the lower bound contributes nothing; within the middle
/// band (both bounds inclusive) the mid rate applies; above it the upper
/// rate applies. The result is rounded to 2 decimal places (half-up) and
/// then capped.
///
/// # Errors
///
/// Returns `InvalidGrossPay` for negative gross pay.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::housing_fund;
/// use payroll_engine::config::BandedRate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let banded = BandedRate {
///     lower_bound: Decimal::from(1000),
///     mid_rate: Decimal::from_str("0.01").unwrap(),
///     upper_bound: Decimal::from(1500),
///     upper_rate: Decimal::from_str("0.02").unwrap(),
///     cap: Decimal::from(100),
/// };
/// // 2% of 4625 is 92.50, under the cap.
/// let amount = housing_fund(Decimal::from(4625), &banded).unwrap();
/// assert_eq!(amount, Decimal::from_str("92.50").unwrap());
/// ```
pub fn housing_fund(gross_pay: Decimal, banded: &BandedRate) -> EngineResult<Decimal> {
    if gross_pay < Decimal::ZERO {
        return Err(EngineError::InvalidGrossPay { amount: gross_pay });
    }

    let rate = if gross_pay < banded.lower_bound {
        Decimal::ZERO
    } else if gross_pay <= banded.upper_bound {
        banded.mid_rate
    } else {
        banded.upper_rate
    };

    let contribution =
        (gross_pay * rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Ok(contribution.min(banded.cap))
}
