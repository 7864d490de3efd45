//! Derived payroll output models.
//!
//! These are transient values owned by the call that produced them:
//! [`PeriodTotals`] from aggregation, [`DeductionBreakdown`] and
//! [`PayrollResult`] from a payroll computation. None are cached or shared
//! across calls.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// Aggregated hours for one employee over one pay period.
///
/// Recomputed on demand by the aggregator; never persisted independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Hours worked up to the daily standard, summed across the period.
    pub regular_hours: Decimal,
    /// Hours worked beyond the daily standard, summed across the period.
    pub overtime_hours: Decimal,
    /// The period the totals cover.
    pub period: PayPeriod,
}

impl PeriodTotals {
    /// All-zero totals for a period with no usable attendance.
    pub fn zero(period: PayPeriod) -> Self {
        Self {
            regular_hours: Decimal::ZERO,
            overtime_hours: Decimal::ZERO,
            period,
        }
    }

    /// Regular plus overtime hours.
    pub fn total_hours(&self) -> Decimal {
        self.regular_hours + self.overtime_hours
    }
}

/// The four statutory deduction amounts for one payroll run, plus their sum.
///
/// Recomputed per run from gross pay; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// Social-insurance contribution (step table).
    pub social_insurance: Decimal,
    /// Health-insurance contribution (flat percentage).
    pub health_insurance: Decimal,
    /// Housing-fund contribution (banded percentage, capped).
    pub housing_fund: Decimal,
    /// Withholding tax (progressive marginal brackets).
    pub withholding_tax: Decimal,
    /// Sum of the four amounts.
    pub total: Decimal,
}

impl DeductionBreakdown {
    /// Builds a breakdown from the four amounts, computing their sum.
    pub fn new(
        social_insurance: Decimal,
        health_insurance: Decimal,
        housing_fund: Decimal,
        withholding_tax: Decimal,
    ) -> Self {
        Self {
            social_insurance,
            health_insurance,
            housing_fund,
            withholding_tax,
            total: social_insurance + health_insurance + housing_fund + withholding_tax,
        }
    }
}

/// The complete result of one payroll computation for one (employee, period).
///
/// A pure function of the compensation profile, the period totals, and the
/// statutory configuration: identical inputs yield identical results.
/// Immutable once produced.
///
/// Net pay may be negative when deductions exceed gross pay; it is reported
/// as-is and never clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollResult {
    /// The employee the computation is for.
    pub employee_id: String,
    /// The period the computation covers.
    pub period: PayPeriod,
    /// Regular hours that earned pay.
    pub regular_hours: Decimal,
    /// Overtime hours that earned pay at the overtime multiplier.
    pub overtime_hours: Decimal,
    /// Total earnings before deductions.
    pub gross_pay: Decimal,
    /// The statutory deductions applied to gross pay.
    pub deductions: DeductionBreakdown,
    /// Gross pay minus total deductions.
    pub net_pay: Decimal,
}
