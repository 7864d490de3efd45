//! Employee and compensation profile models.
//!
//! An employee is identity data composed with an owned
//! [`CompensationProfile`]. The profile's invariants (positive hourly rate,
//! non-negative allowances) are enforced at construction and through its
//! setters, so a profile in hand is always valid.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// An employee's fixed compensation terms for one pay period.
///
/// The hourly rate drives earned pay; the three allowances are fixed
/// per-period add-ons, paid in full regardless of hours worked.
///
/// # Example
///
/// ```
/// use payroll_engine::models::CompensationProfile;
/// use rust_decimal::Decimal;
///
/// let profile = CompensationProfile::new(
///     Decimal::new(10000, 2), // 100.00/hour
///     Decimal::new(150000, 2),
///     Decimal::new(100000, 2),
///     Decimal::new(50000, 2),
/// ).unwrap();
/// assert_eq!(profile.hourly_rate(), Decimal::new(10000, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompensationProfile {
    hourly_rate: Decimal,
    rice_subsidy: Decimal,
    phone_allowance: Decimal,
    clothing_allowance: Decimal,
}

impl CompensationProfile {
    /// Creates a profile, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCompensation` if the hourly rate is not strictly
    /// positive or any allowance is negative.
    pub fn new(
        hourly_rate: Decimal,
        rice_subsidy: Decimal,
        phone_allowance: Decimal,
        clothing_allowance: Decimal,
    ) -> EngineResult<Self> {
        if hourly_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidCompensation {
                field: "hourly_rate".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        for (field, amount) in [
            ("rice_subsidy", rice_subsidy),
            ("phone_allowance", phone_allowance),
            ("clothing_allowance", clothing_allowance),
        ] {
            if amount < Decimal::ZERO {
                return Err(EngineError::InvalidCompensation {
                    field: field.to_string(),
                    message: "must not be negative".to_string(),
                });
            }
        }
        Ok(Self {
            hourly_rate,
            rice_subsidy,
            phone_allowance,
            clothing_allowance,
        })
    }

    /// The hourly pay rate. Always strictly positive.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// The fixed per-period rice subsidy.
    pub fn rice_subsidy(&self) -> Decimal {
        self.rice_subsidy
    }

    /// The fixed per-period phone allowance.
    pub fn phone_allowance(&self) -> Decimal {
        self.phone_allowance
    }

    /// The fixed per-period clothing allowance.
    pub fn clothing_allowance(&self) -> Decimal {
        self.clothing_allowance
    }

    /// Sum of the three fixed allowances.
    pub fn total_allowances(&self) -> Decimal {
        self.rice_subsidy + self.phone_allowance + self.clothing_allowance
    }

    /// Updates the hourly rate (HR update flow).
    ///
    /// # Errors
    ///
    /// Returns `InvalidCompensation` if the new rate is not strictly positive.
    pub fn set_hourly_rate(&mut self, hourly_rate: Decimal) -> EngineResult<()> {
        if hourly_rate <= Decimal::ZERO {
            return Err(EngineError::InvalidCompensation {
                field: "hourly_rate".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        self.hourly_rate = hourly_rate;
        Ok(())
    }

    /// Updates the rice subsidy (HR update flow).
    ///
    /// # Errors
    ///
    /// Returns `InvalidCompensation` if the new amount is negative.
    pub fn set_rice_subsidy(&mut self, amount: Decimal) -> EngineResult<()> {
        Self::check_allowance("rice_subsidy", amount)?;
        self.rice_subsidy = amount;
        Ok(())
    }

    /// Updates the phone allowance (HR update flow).
    ///
    /// # Errors
    ///
    /// Returns `InvalidCompensation` if the new amount is negative.
    pub fn set_phone_allowance(&mut self, amount: Decimal) -> EngineResult<()> {
        Self::check_allowance("phone_allowance", amount)?;
        self.phone_allowance = amount;
        Ok(())
    }

    /// Updates the clothing allowance (HR update flow).
    ///
    /// # Errors
    ///
    /// Returns `InvalidCompensation` if the new amount is negative.
    pub fn set_clothing_allowance(&mut self, amount: Decimal) -> EngineResult<()> {
        Self::check_allowance("clothing_allowance", amount)?;
        self.clothing_allowance = amount;
        Ok(())
    }

    fn check_allowance(field: &str, amount: Decimal) -> EngineResult<()> {
        if amount < Decimal::ZERO {
            return Err(EngineError::InvalidCompensation {
                field: field.to_string(),
                message: "must not be negative".to_string(),
            });
        }
        Ok(())
    }
}

/// An employee subject to payroll computation.
///
/// Identity fields composed with an owned [`CompensationProfile`]; there is
/// no person/employee hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's given name.
    pub first_name: String,
    /// The employee's family name.
    pub last_name: String,
    /// The employee's job position.
    pub position: String,
    /// The employee's compensation terms.
    pub compensation: CompensationProfile,
}

impl Employee {
    /// Returns the employee's display name, given name first.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_profile() -> CompensationProfile {
        CompensationProfile::new(dec("100.00"), dec("1500"), dec("1000"), dec("500")).unwrap()
    }

    #[test]
    fn test_valid_profile_construction() {
        let profile = create_test_profile();
        assert_eq!(profile.hourly_rate(), dec("100.00"));
        assert_eq!(profile.rice_subsidy(), dec("1500"));
        assert_eq!(profile.phone_allowance(), dec("1000"));
        assert_eq!(profile.clothing_allowance(), dec("500"));
    }

    #[test]
    fn test_total_allowances() {
        let profile = create_test_profile();
        assert_eq!(profile.total_allowances(), dec("3000"));
    }

    #[test]
    fn test_zero_allowances_are_valid() {
        let profile =
            CompensationProfile::new(dec("50.00"), dec("0"), dec("0"), dec("0")).unwrap();
        assert_eq!(profile.total_allowances(), dec("0"));
    }

    #[test]
    fn test_zero_hourly_rate_rejected() {
        let result = CompensationProfile::new(dec("0"), dec("0"), dec("0"), dec("0"));
        assert!(matches!(
            result,
            Err(EngineError::InvalidCompensation { ref field, .. }) if field == "hourly_rate"
        ));
    }

    #[test]
    fn test_negative_hourly_rate_rejected() {
        let result = CompensationProfile::new(dec("-10.00"), dec("0"), dec("0"), dec("0"));
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_allowance_rejected() {
        let result = CompensationProfile::new(dec("100.00"), dec("-1"), dec("0"), dec("0"));
        assert!(matches!(
            result,
            Err(EngineError::InvalidCompensation { ref field, .. }) if field == "rice_subsidy"
        ));
    }

    #[test]
    fn test_set_hourly_rate_validates() {
        let mut profile = create_test_profile();
        assert!(profile.set_hourly_rate(dec("0")).is_err());
        assert_eq!(profile.hourly_rate(), dec("100.00"));

        profile.set_hourly_rate(dec("120.00")).unwrap();
        assert_eq!(profile.hourly_rate(), dec("120.00"));
    }

    #[test]
    fn test_set_allowances_validate() {
        let mut profile = create_test_profile();
        assert!(profile.set_rice_subsidy(dec("-1")).is_err());
        assert!(profile.set_phone_allowance(dec("-1")).is_err());
        assert!(profile.set_clothing_allowance(dec("-1")).is_err());

        profile.set_rice_subsidy(dec("2000")).unwrap();
        profile.set_phone_allowance(dec("800")).unwrap();
        profile.set_clothing_allowance(dec("0")).unwrap();
        assert_eq!(profile.total_allowances(), dec("2800"));
    }

    #[test]
    fn test_employee_full_name() {
        let employee = Employee {
            id: "emp_001".to_string(),
            first_name: "Maria".to_string(),
            last_name: "Santos".to_string(),
            position: "Accounting Clerk".to_string(),
            compensation: create_test_profile(),
        };
        assert_eq!(employee.full_name(), "Maria Santos");
    }

    #[test]
    fn test_profile_serializes() {
        let profile = create_test_profile();
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"hourly_rate\":\"100.00\""));
        assert!(json.contains("\"rice_subsidy\":\"1500\""));
    }
}
