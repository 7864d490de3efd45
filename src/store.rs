//! Provider boundary for employee and attendance data.
//!
//! The computation core never owns persistent data: compensation profiles
//! and attendance records come from external collaborators behind the two
//! traits here. [`InMemoryStore`] is the reference implementation used by
//! the HTTP layer and the test suites; a database-backed store would
//! implement the same traits.

use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceSheet, Employee, PayPeriod};

/// Supplies an employee's identity and compensation profile.
pub trait CompensationProvider {
    /// Returns the employee for an identifier.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` for an unknown identifier.
    fn employee(&self, employee_id: &str) -> EngineResult<&Employee>;
}

/// Supplies an employee's attendance records for a period.
pub trait AttendanceProvider {
    /// Returns the ordered records for an employee within the period.
    ///
    /// An empty collection means a known employee with no attendance in the
    /// period, which is a valid zero-hours input.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` for an unknown identifier, so a missing
    /// employee is never mistaken for an employee who simply never
    /// clocked in.
    fn records(&self, employee_id: &str, period: &PayPeriod) -> EngineResult<Vec<AttendanceRecord>>;
}

/// An in-memory employee and attendance store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    employees: BTreeMap<String, Employee>,
    attendance: BTreeMap<String, AttendanceSheet>,
}

impl InMemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an employee, keyed by its id.
    pub fn insert_employee(&mut self, employee: Employee) {
        self.attendance
            .entry(employee.id.clone())
            .or_default();
        self.employees.insert(employee.id.clone(), employee);
    }

    /// Records a login on an employee's attendance sheet.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` for an unknown identifier.
    pub fn record_login(
        &mut self,
        employee_id: &str,
        date: chrono::NaiveDate,
        time: chrono::NaiveTime,
    ) -> EngineResult<()> {
        self.sheet_mut(employee_id)?.record_login(date, time);
        Ok(())
    }

    /// Records a logout on an employee's attendance sheet.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` for an unknown identifier.
    pub fn record_logout(
        &mut self,
        employee_id: &str,
        date: chrono::NaiveDate,
        time: chrono::NaiveTime,
    ) -> EngineResult<()> {
        self.sheet_mut(employee_id)?.record_logout(date, time);
        Ok(())
    }

    fn sheet_mut(&mut self, employee_id: &str) -> EngineResult<&mut AttendanceSheet> {
        if !self.employees.contains_key(employee_id) {
            return Err(EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            });
        }
        Ok(self.attendance.entry(employee_id.to_string()).or_default())
    }
}

impl CompensationProvider for InMemoryStore {
    fn employee(&self, employee_id: &str) -> EngineResult<&Employee> {
        self.employees
            .get(employee_id)
            .ok_or_else(|| EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            })
    }
}

impl AttendanceProvider for InMemoryStore {
    fn records(&self, employee_id: &str, period: &PayPeriod) -> EngineResult<Vec<AttendanceRecord>> {
        if !self.employees.contains_key(employee_id) {
            return Err(EngineError::EmployeeNotFound {
                id: employee_id.to_string(),
            });
        }
        Ok(self
            .attendance
            .get(employee_id)
            .map(|sheet| sheet.records_in(period))
            .unwrap_or_default())
    }
}
