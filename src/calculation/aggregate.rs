//! Attendance aggregation functionality.
//!
//! This module folds a collection of attendance records into per-period
//! totals of regular and overtime hours. Degraded days (no record, missing
//! times, logout not after login) contribute zero hours; they never fail
//! the period.

use rust_decimal::Decimal;

use crate::config::PayPolicy;
use crate::models::{AttendanceRecord, PayPeriod, PeriodTotals};

/// The regular/overtime split of one day's worked hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySplit {
    /// Hours up to the daily standard.
    pub regular_hours: Decimal,
    /// Hours exceeding the daily standard.
    pub overtime_hours: Decimal,
}

/// Splits one day's worked hours into regular and overtime portions.
///
/// Regular hours are capped at the daily standard; anything beyond it is
/// overtime.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::split_daily_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = split_daily_hours(
///     Decimal::from_str("9.00").unwrap(),
///     Decimal::from_str("8.0").unwrap(),
/// );
/// assert_eq!(split.regular_hours, Decimal::from_str("8.0").unwrap());
/// assert_eq!(split.overtime_hours, Decimal::from_str("1.00").unwrap());
/// ```
pub fn split_daily_hours(daily_hours: Decimal, standard: Decimal) -> DailySplit {
    if daily_hours <= standard {
        DailySplit {
            regular_hours: daily_hours,
            overtime_hours: Decimal::ZERO,
        }
    } else {
        DailySplit {
            regular_hours: standard,
            overtime_hours: daily_hours - standard,
        }
    }
}

/// Folds attendance records into [`PeriodTotals`] for an inclusive period.
///
/// For each record whose date falls within the period and whose login and
/// logout are both present with the logout after the login, the day's hours
/// (already rounded to 2 decimal places, half-up) are split against the
/// policy's daily standard and summed. Records outside the period,
/// incomplete days, and days with no record at all contribute zero.
///
/// An empty collection, or one with no records inside the period, yields
/// all-zero totals; callers wanting a schedule estimate instead must opt
/// into [`estimate_schedule`](super::estimate_schedule) explicitly.
///
/// The result depends only on the inputs: re-running with the same records,
/// period, and policy yields identical totals.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::aggregate;
/// use payroll_engine::config::PayPolicy;
/// use payroll_engine::models::{AttendanceRecord, PayPeriod};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let policy = PayPolicy {
///     daily_standard_hours: Decimal::from_str("8.0").unwrap(),
///     overtime_multiplier: Decimal::from_str("1.25").unwrap(),
/// };
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2023, 6, 9).unwrap(),
/// };
/// let records = vec![AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(),
///     login_time: Some(NaiveTime::from_hms_opt(8, 0, 0).unwrap()),
///     logout_time: Some(NaiveTime::from_hms_opt(17, 0, 0).unwrap()),
/// }];
///
/// let totals = aggregate(&records, period, &policy);
/// assert_eq!(totals.regular_hours, Decimal::from_str("8.0").unwrap());
/// assert_eq!(totals.overtime_hours, Decimal::from_str("1.00").unwrap());
/// ```
pub fn aggregate(
    records: &[AttendanceRecord],
    period: PayPeriod,
    policy: &PayPolicy,
) -> PeriodTotals {
    let mut regular_hours = Decimal::ZERO;
    let mut overtime_hours = Decimal::ZERO;

    for record in records {
        if !period.contains_date(record.date) {
            continue;
        }
        let daily_hours = record.worked_hours();
        if daily_hours == Decimal::ZERO {
            continue;
        }
        let split = split_daily_hours(daily_hours, policy.daily_standard_hours);
        regular_hours += split.regular_hours;
        overtime_hours += split.overtime_hours;
    }

    PeriodTotals {
        regular_hours,
        overtime_hours,
        period,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn time(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn record(d: &str, login: &str, logout: &str) -> AttendanceRecord {
        AttendanceRecord {
            date: date(d),
            login_time: Some(time(login)),
            logout_time: Some(time(logout)),
        }
    }

    fn policy() -> PayPolicy {
        PayPolicy {
            daily_standard_hours: dec("8.0"),
            overtime_multiplier: dec("1.25"),
        }
    }

    fn week() -> PayPeriod {
        PayPeriod {
            start_date: date("2023-06-05"),
            end_date: date("2023-06-09"),
        }
    }

    #[test]
    fn test_split_at_standard_no_overtime() {
        let split = split_daily_hours(dec("8.0"), dec("8.0"));
        assert_eq!(split.regular_hours, dec("8.0"));
        assert_eq!(split.overtime_hours, dec("0"));
    }

    #[test]
    fn test_split_below_standard() {
        let split = split_daily_hours(dec("6.5"), dec("8.0"));
        assert_eq!(split.regular_hours, dec("6.5"));
        assert_eq!(split.overtime_hours, dec("0"));
    }

    #[test]
    fn test_split_above_standard() {
        let split = split_daily_hours(dec("10.25"), dec("8.0"));
        assert_eq!(split.regular_hours, dec("8.0"));
        assert_eq!(split.overtime_hours, dec("2.25"));
    }

    #[test]
    fn test_nine_hour_day_yields_one_overtime_hour() {
        let records = vec![record("2023-06-05", "08:00", "17:00")];
        let totals = aggregate(&records, week(), &policy());
        assert_eq!(totals.regular_hours, dec("8.0"));
        assert_eq!(totals.overtime_hours, dec("1.00"));
    }

    #[test]
    fn test_full_week_sums_independently() {
        let records = vec![
            record("2023-06-05", "08:00", "17:00"), // 9h: 8 regular, 1 overtime
            record("2023-06-06", "08:00", "16:00"), // 8h
            record("2023-06-07", "08:00", "14:30"), // 6.5h
            record("2023-06-08", "08:00", "19:00"), // 11h: 8 regular, 3 overtime
            record("2023-06-09", "08:00", "16:00"), // 8h
        ];
        let totals = aggregate(&records, week(), &policy());
        assert_eq!(totals.regular_hours, dec("38.5"));
        assert_eq!(totals.overtime_hours, dec("4.00"));
    }

    #[test]
    fn test_records_outside_period_excluded() {
        let records = vec![
            record("2023-06-04", "08:00", "17:00"), // before start
            record("2023-06-05", "08:00", "16:00"),
            record("2023-06-10", "08:00", "17:00"), // after end
        ];
        let totals = aggregate(&records, week(), &policy());
        assert_eq!(totals.regular_hours, dec("8.00"));
        assert_eq!(totals.overtime_hours, dec("0"));
    }

    #[test]
    fn test_incomplete_day_contributes_zero() {
        let records = vec![
            AttendanceRecord {
                date: date("2023-06-05"),
                login_time: Some(time("08:00")),
                logout_time: None,
            },
            record("2023-06-06", "08:00", "16:00"),
        ];
        let totals = aggregate(&records, week(), &policy());
        assert_eq!(totals.regular_hours, dec("8.00"));
        assert_eq!(totals.overtime_hours, dec("0"));
    }

    #[test]
    fn test_logout_before_login_contributes_zero() {
        let records = vec![
            record("2023-06-05", "17:00", "08:00"),
            record("2023-06-06", "08:00", "16:00"),
        ];
        let totals = aggregate(&records, week(), &policy());
        assert_eq!(totals.regular_hours, dec("8.00"));
    }

    #[test]
    fn test_empty_records_yield_zero_totals() {
        let totals = aggregate(&[], week(), &policy());
        assert_eq!(totals, PeriodTotals::zero(week()));
    }

    #[test]
    fn test_no_records_in_range_yield_zero_totals() {
        let records = vec![record("2023-05-01", "08:00", "17:00")];
        let totals = aggregate(&records, week(), &policy());
        assert_eq!(totals, PeriodTotals::zero(week()));
    }

    #[test]
    fn test_missing_days_are_not_errors() {
        // Only two of five weekdays have records.
        let records = vec![
            record("2023-06-05", "08:00", "16:00"),
            record("2023-06-08", "08:00", "16:00"),
        ];
        let totals = aggregate(&records, week(), &policy());
        assert_eq!(totals.regular_hours, dec("16.00"));
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let records = vec![
            record("2023-06-05", "08:00", "17:00"),
            record("2023-06-06", "08:30", "18:45"),
        ];
        let first = aggregate(&records, week(), &policy());
        let second = aggregate(&records, week(), &policy());
        assert_eq!(first, second);
    }

    #[test]
    fn test_fractional_day_rounds_before_split() {
        // 08:00 to 16:25 is 8.4166... hours, recorded as 8.42, so 0.42
        // overtime rather than 0.416...
        let records = vec![record("2023-06-05", "08:00", "16:25")];
        let totals = aggregate(&records, week(), &policy());
        assert_eq!(totals.regular_hours, dec("8.0"));
        assert_eq!(totals.overtime_hours, dec("0.42"));
    }
}
