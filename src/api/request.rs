//! Request types for the Payroll Computation Engine API.
//!
//! This module defines the JSON request structures for the `/payroll` and
//! `/deductions` endpoints, and their conversions into domain types. The
//! compensation conversion is fallible: profile invariants are enforced at
//! the boundary, so the core only ever sees valid profiles.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{AttendanceRecord, CompensationProfile, Employee, PayPeriod};

/// Request body for the `/payroll` endpoint.
///
/// Carries the employee, the pay period, and the period's attendance
/// records; the statutory schedule comes from server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// The pay period to compute.
    pub period: PayPeriodRequest,
    /// The attendance records for the period.
    #[serde(default)]
    pub attendance: Vec<AttendanceEntry>,
}

/// Employee information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's given name.
    pub first_name: String,
    /// The employee's family name.
    pub last_name: String,
    /// The employee's job position.
    pub position: String,
    /// The employee's compensation terms.
    pub compensation: CompensationRequest,
}

/// Compensation terms in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompensationRequest {
    /// The hourly pay rate. Must be strictly positive.
    pub hourly_rate: Decimal,
    /// The fixed per-period rice subsidy.
    #[serde(default)]
    pub rice_subsidy: Decimal,
    /// The fixed per-period phone allowance.
    #[serde(default)]
    pub phone_allowance: Decimal,
    /// The fixed per-period clothing allowance.
    #[serde(default)]
    pub clothing_allowance: Decimal,
}

/// Pay period information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayPeriodRequest {
    /// The start date of the pay period (inclusive).
    pub start_date: NaiveDate,
    /// The end date of the pay period (inclusive).
    pub end_date: NaiveDate,
}

/// One day's attendance in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// The calendar day.
    pub date: NaiveDate,
    /// The recorded login time, if any.
    #[serde(default)]
    pub login_time: Option<NaiveTime>,
    /// The recorded logout time, if any.
    #[serde(default)]
    pub logout_time: Option<NaiveTime>,
}

/// Request body for the `/deductions` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeductionsRequest {
    /// The gross pay to price the deduction lines for.
    pub gross_pay: Decimal,
}

impl TryFrom<CompensationRequest> for CompensationProfile {
    type Error = EngineError;

    fn try_from(req: CompensationRequest) -> Result<Self, Self::Error> {
        CompensationProfile::new(
            req.hourly_rate,
            req.rice_subsidy,
            req.phone_allowance,
            req.clothing_allowance,
        )
    }
}

impl TryFrom<EmployeeRequest> for Employee {
    type Error = EngineError;

    fn try_from(req: EmployeeRequest) -> Result<Self, Self::Error> {
        Ok(Employee {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            position: req.position,
            compensation: req.compensation.try_into()?,
        })
    }
}

impl From<PayPeriodRequest> for PayPeriod {
    fn from(req: PayPeriodRequest) -> Self {
        PayPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}

impl From<AttendanceEntry> for AttendanceRecord {
    fn from(req: AttendanceEntry) -> Self {
        AttendanceRecord {
            date: req.date,
            login_time: req.login_time,
            logout_time: req.logout_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_payroll_request() {
        let json = r#"{
            "employee": {
                "id": "emp_001",
                "first_name": "Maria",
                "last_name": "Santos",
                "position": "Accounting Clerk",
                "compensation": {
                    "hourly_rate": "100.00",
                    "rice_subsidy": "1500",
                    "phone_allowance": "1000",
                    "clothing_allowance": "500"
                }
            },
            "period": {
                "start_date": "2023-06-05",
                "end_date": "2023-06-11"
            },
            "attendance": [
                {
                    "date": "2023-06-05",
                    "login_time": "08:00:00",
                    "logout_time": "17:00:00"
                }
            ]
        }"#;

        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee.id, "emp_001");
        assert_eq!(request.employee.compensation.hourly_rate, dec("100.00"));
        assert_eq!(request.attendance.len(), 1);
    }

    #[test]
    fn test_attendance_defaults_to_empty() {
        let json = r#"{
            "employee": {
                "id": "emp_001",
                "first_name": "Maria",
                "last_name": "Santos",
                "position": "Accounting Clerk",
                "compensation": { "hourly_rate": "100.00" }
            },
            "period": {
                "start_date": "2023-06-05",
                "end_date": "2023-06-11"
            }
        }"#;

        let request: PayrollRequest = serde_json::from_str(json).unwrap();
        assert!(request.attendance.is_empty());
        assert_eq!(request.employee.compensation.rice_subsidy, Decimal::ZERO);
    }

    #[test]
    fn test_employee_conversion_validates_compensation() {
        let req = EmployeeRequest {
            id: "emp_001".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Santos".to_string(),
            position: "Accounting Clerk".to_string(),
            compensation: CompensationRequest {
                hourly_rate: dec("0"),
                rice_subsidy: dec("0"),
                phone_allowance: dec("0"),
                clothing_allowance: dec("0"),
            },
        };

        let result: Result<Employee, _> = req.try_into();
        assert!(matches!(
            result,
            Err(EngineError::InvalidCompensation { .. })
        ));
    }

    #[test]
    fn test_valid_employee_conversion() {
        let req = EmployeeRequest {
            id: "emp_001".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Santos".to_string(),
            position: "Accounting Clerk".to_string(),
            compensation: CompensationRequest {
                hourly_rate: dec("100.00"),
                rice_subsidy: dec("1500"),
                phone_allowance: dec("1000"),
                clothing_allowance: dec("500"),
            },
        };

        let employee: Employee = req.try_into().unwrap();
        assert_eq!(employee.compensation.total_allowances(), dec("3000"));
    }

    #[test]
    fn test_attendance_entry_with_only_login() {
        let json = r#"{"date": "2023-06-05", "login_time": "08:00:00"}"#;
        let entry: AttendanceEntry = serde_json::from_str(json).unwrap();
        let record: AttendanceRecord = entry.into();
        assert!(record.login_time.is_some());
        assert!(record.logout_time.is_none());
    }

    #[test]
    fn test_deserialize_deductions_request() {
        let json = r#"{"gross_pay": "4625.00"}"#;
        let request: DeductionsRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.gross_pay, dec("4625.00"));
    }
}
