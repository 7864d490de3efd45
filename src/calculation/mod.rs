//! Calculation logic for the Payroll Computation Engine.
//!
//! This module contains all the calculation functions for computing pay:
//! attendance aggregation into regular/overtime period totals, the
//! estimated-schedule degraded mode, the four statutory contribution
//! lookups, and the payroll orchestration that ties them together.

mod aggregate;
mod estimated_schedule;
mod health_insurance;
mod housing_fund;
mod payroll;
mod social_insurance;
mod withholding_tax;

pub use aggregate::{DailySplit, aggregate, split_daily_hours};
pub use estimated_schedule::estimate_schedule;
pub use health_insurance::health_insurance;
pub use housing_fund::housing_fund;
pub use payroll::{compute_payroll, gross_pay};
pub use social_insurance::social_insurance;
pub use withholding_tax::withholding_tax;
