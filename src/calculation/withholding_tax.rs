//! Withholding-tax calculation.
//!
//! A progressive marginal-bracket table: gross pay at or below the tax-free
//! threshold owes nothing; each higher bracket owes its fixed base plus a
//! marginal rate on the excess over the bracket's lower bound.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::TaxTable;
use crate::error::{EngineError, EngineResult};

/// Computes the withholding tax for a gross pay.
///
/// Gross pay exactly on a bracket's upper bound belongs to that (lower)
/// bracket. The result is rounded to 2 decimal places (half-up).
///
/// # Errors
///
/// Returns `InvalidGrossPay` for negative gross pay. A table loaded through
/// [`ConfigLoader`](crate::config::ConfigLoader) is validated to be total,
/// so the bracket search itself cannot miss.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::withholding_tax;
/// use payroll_engine::config::{TaxBracket, TaxTable};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let table = TaxTable {
///     brackets: vec![
///         TaxBracket {
///             over: Decimal::ZERO,
///             up_to: Some(Decimal::from(20833)),
///             base: Decimal::ZERO,
///             rate: Decimal::ZERO,
///         },
///         TaxBracket {
///             over: Decimal::from(20833),
///             up_to: None,
///             base: Decimal::ZERO,
///             rate: Decimal::from_str("0.20").unwrap(),
///         },
///     ],
/// };
/// // 25000 owes 20% of the excess over 20833.
/// let tax = withholding_tax(Decimal::from(25000), &table).unwrap();
/// assert_eq!(tax, Decimal::from_str("833.40").unwrap());
/// ```
pub fn withholding_tax(gross_pay: Decimal, table: &TaxTable) -> EngineResult<Decimal> {
    if gross_pay < Decimal::ZERO {
        return Err(EngineError::InvalidGrossPay { amount: gross_pay });
    }

    for bracket in &table.brackets {
        let in_bracket = match bracket.up_to {
            Some(bound) => gross_pay <= bound,
            None => true,
        };
        if in_bracket {
            let tax = bracket.base + (gross_pay - bracket.over) * bracket.rate;
            return Ok(
                tax.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            );
        }
    }

    // Reachable only for a table that bypassed validation.
    Err(EngineError::InvalidTable {
        table: "withholding_tax".to_string(),
        message: format!("no bracket covers gross pay {gross_pay}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TaxBracket;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn bracket(over: &str, up_to: Option<&str>, base: &str, rate: &str) -> TaxBracket {
        TaxBracket {
            over: dec(over),
            up_to: up_to.map(dec),
            base: dec(base),
            rate: dec(rate),
        }
    }

    /// The 2023 six-bracket schedule.
    fn table_2023() -> TaxTable {
        TaxTable {
            brackets: vec![
                bracket("0", Some("20833"), "0", "0"),
                bracket("20833", Some("33333"), "0", "0.20"),
                bracket("33333", Some("66667"), "2500", "0.25"),
                bracket("66667", Some("166667"), "10833.33", "0.30"),
                bracket("166667", Some("666667"), "40833.33", "0.32"),
                bracket("666667", None, "200833.33", "0.35"),
            ],
        }
    }

    #[test]
    fn test_below_threshold_owes_nothing() {
        assert_eq!(withholding_tax(dec("4625"), &table_2023()).unwrap(), Decimal::ZERO);
        assert_eq!(withholding_tax(Decimal::ZERO, &table_2023()).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_threshold_boundary_is_tax_free() {
        // Exactly 20833 is still in the tax-free bracket.
        assert_eq!(withholding_tax(dec("20833"), &table_2023()).unwrap(), Decimal::ZERO);
        // One peso more owes 20% of that peso.
        assert_eq!(withholding_tax(dec("20834"), &table_2023()).unwrap(), dec("0.20"));
    }

    #[test]
    fn test_second_bracket_marginal_rate() {
        // 25000: 20% of (25000 - 20833) = 833.40
        assert_eq!(withholding_tax(dec("25000"), &table_2023()).unwrap(), dec("833.40"));
    }

    #[test]
    fn test_third_bracket_base_plus_excess() {
        // 40000: 2500 + 25% of (40000 - 33333) = 2500 + 1666.75 = 4166.75
        assert_eq!(withholding_tax(dec("40000"), &table_2023()).unwrap(), dec("4166.75"));
    }

    #[test]
    fn test_bracket_upper_bound_belongs_to_lower_bracket() {
        // Exactly 33333 uses the 20% bracket: 20% of 12500 = 2500.
        assert_eq!(withholding_tax(dec("33333"), &table_2023()).unwrap(), dec("2500.00"));
    }

    #[test]
    fn test_top_bracket_is_unbounded() {
        // 1,000,000: 200833.33 + 35% of (1000000 - 666667) = 317499.88
        assert_eq!(
            withholding_tax(dec("1000000"), &table_2023()).unwrap(),
            dec("317499.88")
        );
    }

    #[test]
    fn test_fourth_bracket() {
        // 100000: 10833.33 + 30% of (100000 - 66667) = 20833.23
        assert_eq!(
            withholding_tax(dec("100000"), &table_2023()).unwrap(),
            dec("20833.23")
        );
    }

    #[test]
    fn test_result_rounds_half_up() {
        // 20838.33: 20% of 5.33 = 1.066 -> 1.07
        assert_eq!(withholding_tax(dec("20838.33"), &table_2023()).unwrap(), dec("1.07"));
    }

    #[test]
    fn test_negative_gross_pay_rejected() {
        let result = withholding_tax(dec("-100"), &table_2023());
        assert!(matches!(result, Err(EngineError::InvalidGrossPay { .. })));
    }
}
