//! Core data models for the Payroll Computation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod pay_period;
mod payroll_result;

pub use attendance::{AttendanceRecord, AttendanceSheet};
pub use employee::{CompensationProfile, Employee};
pub use pay_period::PayPeriod;
pub use payroll_result::{DeductionBreakdown, PayrollResult, PeriodTotals};
