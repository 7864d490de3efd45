//! Estimated-schedule fallback for periods with no usable attendance.
//!
//! This is a DEGRADED MODE, distinct from real-attendance aggregation:
//! it assumes a standard working day on every weekday in the period and
//! produces no overtime. Callers must opt into it explicitly after
//! observing all-zero totals from [`aggregate`](super::aggregate); the
//! engine never substitutes it silently.

use chrono::{Datelike, Weekday};
use rust_decimal::Decimal;

use crate::config::PayPolicy;
use crate::models::{PayPeriod, PeriodTotals};

/// Estimates period totals from the standard schedule instead of attendance.
///
/// Every Monday-to-Friday day in the inclusive period contributes the
/// policy's daily standard hours as regular time; weekends and overtime
/// contribute nothing.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::estimate_schedule;
/// use payroll_engine::config::PayPolicy;
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = PayPolicy {
///     daily_standard_hours: Decimal::from_str("8.0").unwrap(),
///     overtime_multiplier: Decimal::from_str("1.25").unwrap(),
/// };
/// // Monday through Sunday: five weekdays.
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2023, 6, 11).unwrap(),
/// };
///
/// let totals = estimate_schedule(period, &policy);
/// assert_eq!(totals.regular_hours, Decimal::from_str("40.0").unwrap());
/// assert_eq!(totals.overtime_hours, Decimal::ZERO);
/// ```
pub fn estimate_schedule(period: PayPeriod, policy: &PayPolicy) -> PeriodTotals {
    let weekdays = period
        .days()
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .count();

    PeriodTotals {
        regular_hours: Decimal::from(weekdays as u64) * policy.daily_standard_hours,
        overtime_hours: Decimal::ZERO,
        period,
    }
}
