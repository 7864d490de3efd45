//! Payroll orchestration.
//!
//! This module derives gross pay from a compensation profile and period
//! totals, invokes the four statutory contribution tables independently,
//! and assembles the final [`PayrollResult`].

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::{PayPolicy, StatutoryConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{CompensationProfile, DeductionBreakdown, Employee, PayrollResult, PeriodTotals};

use super::{health_insurance, housing_fund, social_insurance, withholding_tax};

/// Derives gross pay from a compensation profile and period totals.
///
/// Gross pay is regular hours at the hourly rate, plus overtime hours at
/// the hourly rate times the policy's overtime multiplier, plus the three
/// fixed allowances in full. Allowances are never prorated by attendance.
/// The result is rounded to 2 decimal places (half-up).
///
/// # Errors
///
/// Returns `InvalidCompensation` for a non-positive hourly rate and
/// `InvalidHours` for negative regular or overtime hours.
pub fn gross_pay(
    profile: &CompensationProfile,
    totals: &PeriodTotals,
    policy: &PayPolicy,
) -> EngineResult<Decimal> {
    if profile.hourly_rate() <= Decimal::ZERO {
        return Err(EngineError::InvalidCompensation {
            field: "hourly_rate".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }
    if totals.regular_hours < Decimal::ZERO {
        return Err(EngineError::InvalidHours {
            message: "regular hours are negative".to_string(),
        });
    }
    if totals.overtime_hours < Decimal::ZERO {
        return Err(EngineError::InvalidHours {
            message: "overtime hours are negative".to_string(),
        });
    }

    let earned = totals.regular_hours * profile.hourly_rate()
        + totals.overtime_hours * profile.hourly_rate() * policy.overtime_multiplier;
    let gross = earned + profile.total_allowances();

    Ok(gross.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// Computes one payroll run for one (employee, period).
///
/// Gross pay is derived from the employee's compensation profile and the
/// aggregated totals; each of the four contribution tables is then invoked
/// independently with that gross pay (none depends on another's output);
/// net pay is gross minus the summed deductions, reported as-is even when
/// negative.
///
/// The result is a pure function of the profile, the totals, and the
/// statutory configuration: identical inputs yield identical results, so
/// a payroll run is reproducible and auditable after the fact.
///
/// # Errors
///
/// Returns `InvalidCompensation` for a non-positive hourly rate and
/// `InvalidHours` for negative totals. No partial result is produced on
/// error.
///
/// # Examples
///
/// ```no_run
/// use payroll_engine::calculation::{aggregate, compute_payroll};
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::{CompensationProfile, Employee, PayPeriod, PeriodTotals};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/ph2023").unwrap();
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     first_name: "Maria".to_string(),
///     last_name: "Santos".to_string(),
///     position: "Accounting Clerk".to_string(),
///     compensation: CompensationProfile::new(
///         Decimal::from(100),
///         Decimal::ZERO,
///         Decimal::ZERO,
///         Decimal::ZERO,
///     ).unwrap(),
/// };
/// let totals = PeriodTotals {
///     regular_hours: Decimal::from(40),
///     overtime_hours: Decimal::from(5),
///     period: PayPeriod {
///         start_date: NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(),
///         end_date: NaiveDate::from_ymd_opt(2023, 6, 11).unwrap(),
///     },
/// };
///
/// let result = compute_payroll(&employee, &totals, loader.config()).unwrap();
/// assert_eq!(result.gross_pay, Decimal::from(4625));
/// ```
pub fn compute_payroll(
    employee: &Employee,
    totals: &PeriodTotals,
    config: &StatutoryConfig,
) -> EngineResult<PayrollResult> {
    let gross = gross_pay(&employee.compensation, totals, config.policy())?;

    let deductions = DeductionBreakdown::new(
        social_insurance(gross, config.social_insurance())?,
        health_insurance(gross, config.health_insurance())?,
        housing_fund(gross, config.housing_fund())?,
        withholding_tax(gross, config.withholding_tax())?,
    );

    Ok(PayrollResult {
        employee_id: employee.id.clone(),
        period: totals.period,
        regular_hours: totals.regular_hours,
        overtime_hours: totals.overtime_hours,
        gross_pay: gross,
        deductions,
        net_pay: gross - deductions.total,
    })
}
