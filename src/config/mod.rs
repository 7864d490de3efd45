//! Configuration loading and management for the Payroll Computation Engine.
//!
//! The statutory deduction schedules (social-insurance steps, health-insurance
//! rate, housing-fund bands, withholding-tax brackets) and the pay policy
//! constants are configuration inputs, not hardwired business logic, so a
//! future-year schedule update never touches the algorithms. This module
//! loads them from YAML files and validates their structure up front.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/ph2023").unwrap();
//! println!("Loaded schedule: {}", loader.config().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BandedRate, ContributionStep, ContributionsConfig, FlatRate, PayPolicy, ScheduleMetadata,
    StatutoryConfig, StepTable, TaxBracket, TaxConfig, TaxTable,
};
