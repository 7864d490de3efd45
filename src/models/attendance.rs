//! Attendance record and attendance sheet models.
//!
//! An [`AttendanceRecord`] holds the login and logout times for one employee
//! on one calendar day. Either time may be recorded first; worked hours are
//! derived only once both are present. An [`AttendanceSheet`] is the ordered
//! date-keyed collection of one employee's records.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::PayPeriod;

/// One employee's attendance for one calendar day.
///
/// Login and logout are each optional until recorded. A day derives non-zero
/// hours only when both are present and the logout is after the login;
/// anything else (still clocked in, times entered out of order) is a
/// degraded day worth zero hours, not an error. Overnight shifts crossing
/// midnight are not supported.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AttendanceRecord;
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2023, 6, 5).unwrap(),
///     login_time: Some(NaiveTime::from_hms_opt(8, 0, 0).unwrap()),
///     logout_time: Some(NaiveTime::from_hms_opt(17, 0, 0).unwrap()),
/// };
/// assert_eq!(record.worked_hours(), Decimal::new(900, 2)); // 9.00
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The calendar day this record covers.
    pub date: NaiveDate,
    /// The recorded login time, if any.
    #[serde(default)]
    pub login_time: Option<NaiveTime>,
    /// The recorded logout time, if any.
    #[serde(default)]
    pub logout_time: Option<NaiveTime>,
}

impl AttendanceRecord {
    /// Creates an empty record for a day, with no times recorded yet.
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            login_time: None,
            logout_time: None,
        }
    }

    /// Derives the hours worked on this day, rounded to 2 decimal places
    /// (half-up).
    ///
    /// Returns zero when either time is missing or the logout is not after
    /// the login.
    pub fn worked_hours(&self) -> Decimal {
        let (Some(login), Some(logout)) = (self.login_time, self.logout_time) else {
            return Decimal::ZERO;
        };
        if logout <= login {
            return Decimal::ZERO;
        }

        let minutes = (logout - login).num_minutes();
        (Decimal::new(minutes, 0) / Decimal::new(60, 0))
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Whether both times are present and the logout is after the login.
    pub fn is_complete(&self) -> bool {
        matches!(
            (self.login_time, self.logout_time),
            (Some(login), Some(logout)) if logout > login
        )
    }
}

/// One employee's attendance records, keyed by date in ascending order.
///
/// This is the only mutation surface for attendance: login and logout are
/// recorded through the sheet, independently and in either order, and the
/// aggregator consumes range queries over it. The sheet is owned by the
/// attendance store; the computation core only ever reads snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSheet {
    records: BTreeMap<NaiveDate, AttendanceRecord>,
}

impl AttendanceSheet {
    /// Creates an empty sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a login time for a day, creating the day's record if needed.
    /// A repeated login for the same day overwrites the earlier one.
    pub fn record_login(&mut self, date: NaiveDate, time: NaiveTime) {
        self.records
            .entry(date)
            .or_insert_with(|| AttendanceRecord::empty(date))
            .login_time = Some(time);
    }

    /// Records a logout time for a day, creating the day's record if needed.
    /// A logout may arrive before its login; hours stay zero until both exist.
    pub fn record_logout(&mut self, date: NaiveDate, time: NaiveTime) {
        self.records
            .entry(date)
            .or_insert_with(|| AttendanceRecord::empty(date))
            .logout_time = Some(time);
    }

    /// Returns the record for a day, if one exists.
    pub fn get(&self, date: NaiveDate) -> Option<&AttendanceRecord> {
        self.records.get(&date)
    }

    /// Returns the records whose dates fall within the period, in date order.
    pub fn records_in(&self, period: &PayPeriod) -> Vec<AttendanceRecord> {
        self.records
            .range(period.start_date..=period.end_date)
            .map(|(_, record)| record.clone())
            .collect()
    }

    /// The number of days with at least one recorded time.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the sheet has no records at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
