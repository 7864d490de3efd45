//! Error types for the Payroll Computation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll computation.
//!
//! Degraded attendance data (a missing day, a logout that is not after the
//! login) is deliberately NOT represented here: such days contribute zero
//! hours and never fail a period.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Payroll Computation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParse {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A statutory table in the configuration is structurally invalid
    /// (unsorted, overlapping, or non-total brackets).
    #[error("Malformed statutory table '{table}': {message}")]
    InvalidTable {
        /// The name of the offending table (e.g., "social_insurance").
        table: String,
        /// A description of the structural defect.
        message: String,
    },

    /// No employee exists for the given identifier.
    ///
    /// Distinct from a known employee with no attendance records, which is
    /// a valid zero-hours input.
    #[error("No such employee: {id}")]
    EmployeeNotFound {
        /// The identifier that was not found.
        id: String,
    },

    /// A compensation profile field was invalid (e.g., non-positive
    /// hourly rate).
    #[error("Invalid compensation field '{field}': {message}")]
    InvalidCompensation {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Period totals contained negative hours. This indicates an upstream
    /// aggregator bug, not bad user data.
    #[error("Invalid period hours: {message}")]
    InvalidHours {
        /// A description of the invalid totals.
        message: String,
    },

    /// A negative gross pay was passed to a contribution table.
    #[error("Gross pay must be non-negative, got {amount}")]
    InvalidGrossPay {
        /// The rejected amount.
        amount: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_displays_path_and_message() {
        let error = EngineError::ConfigParse {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_table_displays_table_and_message() {
        let error = EngineError::InvalidTable {
            table: "social_insurance".to_string(),
            message: "bracket bounds are not strictly increasing".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed statutory table 'social_insurance': bracket bounds are not strictly increasing"
        );
    }

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            id: "emp_404".to_string(),
        };
        assert_eq!(error.to_string(), "No such employee: emp_404");
    }

    #[test]
    fn test_invalid_compensation_displays_field_and_message() {
        let error = EngineError::InvalidCompensation {
            field: "hourly_rate".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid compensation field 'hourly_rate': must be greater than zero"
        );
    }

    #[test]
    fn test_invalid_hours_displays_message() {
        let error = EngineError::InvalidHours {
            message: "regular hours are negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid period hours: regular hours are negative"
        );
    }

    #[test]
    fn test_invalid_gross_pay_displays_amount() {
        let error = EngineError::InvalidGrossPay {
            amount: Decimal::from_str("-1.50").unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Gross pay must be non-negative, got -1.50"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_employee_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound {
                id: "emp_001".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_employee_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
