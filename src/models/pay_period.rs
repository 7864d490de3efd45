//! Pay period model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive date range over which hours are aggregated for one payroll
/// computation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriod;
/// use chrono::NaiveDate;
///
/// let period = PayPeriod {
///     start_date: NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2023, 6, 11).unwrap(),
/// };
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2023, 6, 5).unwrap()));
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2023, 6, 11).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2023, 6, 12).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriod {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

impl PayPeriod {
    /// Checks if a given date falls within this pay period.
    ///
    /// The check is inclusive of both start and end dates.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Iterates over every calendar day in the period, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start_date
            .iter_days()
            .take_while(|d| *d <= self.end_date)
    }
}
