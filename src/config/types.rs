//! Configuration types for statutory deduction schedules.
//!
//! This module contains the strongly-typed configuration structures that are
//! deserialized from YAML configuration files, plus the structural validation
//! that makes a malformed table a load-time configuration error rather than
//! a silent default.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the statutory schedule in effect.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// The human-readable name of the schedule.
    pub name: String,
    /// The schedule year or revision identifier.
    pub version: String,
    /// URL to the official schedule documentation.
    pub source_url: String,
}

/// One step of a piecewise-constant contribution table.
///
/// A step covers gross pay up to and including `up_to`; the final step of a
/// table omits `up_to` and is unbounded above.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionStep {
    /// Inclusive upper bound of the step, absent for the ceiling step.
    #[serde(default)]
    pub up_to: Option<Decimal>,
    /// The fixed contribution amount for this step.
    pub amount: Decimal,
}

/// A piecewise-constant step table keyed by gross-pay bracket.
///
/// Brackets are contiguous, non-overlapping, and upper-bound-inclusive; the
/// last bracket is unbounded above so the table is total over all
/// non-negative inputs.
#[derive(Debug, Clone, Deserialize)]
pub struct StepTable {
    /// The steps, ordered by ascending upper bound.
    pub brackets: Vec<ContributionStep>,
}

/// A flat percentage contribution with no cap and no floor.
#[derive(Debug, Clone, Deserialize)]
pub struct FlatRate {
    /// The contribution rate as a fraction of gross pay (e.g., "0.04").
    pub rate: Decimal,
}

/// A percentage contribution whose rate varies by gross-pay band, with the
/// result capped at a fixed maximum.
///
/// Below `lower_bound` the rate is zero; within [`lower_bound`,
/// `upper_bound`] the `mid_rate` applies; above `upper_bound` the
/// `upper_rate` applies. The cap dominates every band.
#[derive(Debug, Clone, Deserialize)]
pub struct BandedRate {
    /// Gross pay below this contributes nothing.
    pub lower_bound: Decimal,
    /// Rate within the middle band (both bounds inclusive).
    pub mid_rate: Decimal,
    /// Inclusive upper bound of the middle band.
    pub upper_bound: Decimal,
    /// Rate above the middle band.
    pub upper_rate: Decimal,
    /// Absolute maximum contribution regardless of band.
    pub cap: Decimal,
}

/// One bracket of a progressive marginal tax table.
///
/// Tax within the bracket is `base + (gross − over) × rate`. A bracket
/// covers gross pay in (`over`, `up_to`]; the final bracket omits `up_to`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxBracket {
    /// Exclusive lower bound of the bracket.
    pub over: Decimal,
    /// Inclusive upper bound, absent for the top bracket.
    #[serde(default)]
    pub up_to: Option<Decimal>,
    /// Fixed tax owed at the bracket's lower bound.
    pub base: Decimal,
    /// Marginal rate on the excess over the lower bound.
    pub rate: Decimal,
}

/// A progressive marginal-bracket withholding-tax table.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxTable {
    /// The brackets, ordered by ascending lower bound.
    pub brackets: Vec<TaxBracket>,
}

/// Pay policy constants.
#[derive(Debug, Clone, Deserialize)]
pub struct PayPolicy {
    /// Daily hours up to which work counts as regular time.
    pub daily_standard_hours: Decimal,
    /// Multiplier applied to the hourly rate for overtime hours.
    pub overtime_multiplier: Decimal,
}

/// Contributions configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionsConfig {
    /// The social-insurance step table.
    pub social_insurance: StepTable,
    /// The health-insurance flat rate.
    pub health_insurance: FlatRate,
    /// The housing-fund banded rate.
    pub housing_fund: BandedRate,
}

/// Tax configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxConfig {
    /// The withholding-tax bracket table.
    pub withholding_tax: TaxTable,
}

/// The complete, validated statutory configuration.
///
/// Construction validates every table, so any `StatutoryConfig` in hand is
/// structurally sound: each contribution lookup is total over non-negative
/// gross pay.
#[derive(Debug, Clone)]
pub struct StatutoryConfig {
    metadata: ScheduleMetadata,
    social_insurance: StepTable,
    health_insurance: FlatRate,
    housing_fund: BandedRate,
    withholding_tax: TaxTable,
    policy: PayPolicy,
}

impl StatutoryConfig {
    /// Creates a configuration from its component parts, validating every
    /// table.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTable` when a table is empty, unsorted, overlapping,
    /// not total, or carries negative amounts or rates, and
    /// `InvalidCompensation`-style policy errors for non-positive policy
    /// constants.
    pub fn new(
        metadata: ScheduleMetadata,
        contributions: ContributionsConfig,
        tax: TaxConfig,
        policy: PayPolicy,
    ) -> EngineResult<Self> {
        validate_step_table(&contributions.social_insurance)?;
        validate_flat_rate(&contributions.health_insurance)?;
        validate_banded_rate(&contributions.housing_fund)?;
        validate_tax_table(&tax.withholding_tax)?;
        validate_policy(&policy)?;

        Ok(Self {
            metadata,
            social_insurance: contributions.social_insurance,
            health_insurance: contributions.health_insurance,
            housing_fund: contributions.housing_fund,
            withholding_tax: tax.withholding_tax,
            policy,
        })
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the social-insurance step table.
    pub fn social_insurance(&self) -> &StepTable {
        &self.social_insurance
    }

    /// Returns the health-insurance flat rate.
    pub fn health_insurance(&self) -> &FlatRate {
        &self.health_insurance
    }

    /// Returns the housing-fund banded rate.
    pub fn housing_fund(&self) -> &BandedRate {
        &self.housing_fund
    }

    /// Returns the withholding-tax table.
    pub fn withholding_tax(&self) -> &TaxTable {
        &self.withholding_tax
    }

    /// Returns the pay policy constants.
    pub fn policy(&self) -> &PayPolicy {
        &self.policy
    }
}

fn table_error(table: &str, message: impl Into<String>) -> EngineError {
    EngineError::InvalidTable {
        table: table.to_string(),
        message: message.into(),
    }
}

fn validate_step_table(table: &StepTable) -> EngineResult<()> {
    const NAME: &str = "social_insurance";

    if table.brackets.is_empty() {
        return Err(table_error(NAME, "table has no brackets"));
    }

    let mut previous_bound: Option<Decimal> = None;
    let last_index = table.brackets.len() - 1;
    for (index, step) in table.brackets.iter().enumerate() {
        if step.amount < Decimal::ZERO {
            return Err(table_error(NAME, format!("bracket {index} has a negative amount")));
        }
        match (step.up_to, index == last_index) {
            (None, false) => {
                return Err(table_error(
                    NAME,
                    format!("bracket {index} is unbounded but is not the last bracket"),
                ));
            }
            (Some(bound), last) => {
                if last {
                    return Err(table_error(NAME, "last bracket must be unbounded above"));
                }
                if let Some(previous) = previous_bound {
                    if bound <= previous {
                        return Err(table_error(
                            NAME,
                            "bracket bounds are not strictly increasing",
                        ));
                    }
                }
                previous_bound = Some(bound);
            }
            (None, true) => {}
        }
    }
    Ok(())
}

fn validate_flat_rate(rate: &FlatRate) -> EngineResult<()> {
    if rate.rate < Decimal::ZERO || rate.rate > Decimal::ONE {
        return Err(table_error(
            "health_insurance",
            "rate must be within [0, 1]",
        ));
    }
    Ok(())
}

fn validate_banded_rate(banded: &BandedRate) -> EngineResult<()> {
    const NAME: &str = "housing_fund";

    if banded.lower_bound < Decimal::ZERO {
        return Err(table_error(NAME, "lower bound must not be negative"));
    }
    if banded.upper_bound < banded.lower_bound {
        return Err(table_error(NAME, "upper bound must not be below lower bound"));
    }
    if banded.mid_rate < Decimal::ZERO || banded.upper_rate < Decimal::ZERO {
        return Err(table_error(NAME, "band rates must not be negative"));
    }
    if banded.cap < Decimal::ZERO {
        return Err(table_error(NAME, "cap must not be negative"));
    }
    Ok(())
}

fn validate_tax_table(table: &TaxTable) -> EngineResult<()> {
    const NAME: &str = "withholding_tax";

    if table.brackets.is_empty() {
        return Err(table_error(NAME, "table has no brackets"));
    }

    let first = &table.brackets[0];
    if first.over != Decimal::ZERO {
        return Err(table_error(NAME, "first bracket must start at zero"));
    }

    let last_index = table.brackets.len() - 1;
    let mut previous_rate: Option<Decimal> = None;
    let mut previous_upper: Option<Decimal> = None;
    for (index, bracket) in table.brackets.iter().enumerate() {
        if bracket.base < Decimal::ZERO || bracket.rate < Decimal::ZERO {
            return Err(table_error(
                NAME,
                format!("bracket {index} has a negative base or rate"),
            ));
        }
        if let Some(upper) = previous_upper {
            if bracket.over != upper {
                return Err(table_error(
                    NAME,
                    format!("bracket {index} does not start where the previous one ends"),
                ));
            }
        }
        if let Some(rate) = previous_rate {
            if bracket.rate <= rate {
                return Err(table_error(NAME, "bracket rates are not strictly increasing"));
            }
        }
        previous_rate = Some(bracket.rate);
        match (bracket.up_to, index == last_index) {
            (None, false) => {
                return Err(table_error(
                    NAME,
                    format!("bracket {index} is unbounded but is not the last bracket"),
                ));
            }
            (Some(upper), last) => {
                if last {
                    return Err(table_error(NAME, "last bracket must be unbounded above"));
                }
                if upper <= bracket.over {
                    return Err(table_error(
                        NAME,
                        format!("bracket {index} has an upper bound at or below its lower bound"),
                    ));
                }
                previous_upper = Some(upper);
            }
            (None, true) => {}
        }
    }
    Ok(())
}

fn validate_policy(policy: &PayPolicy) -> EngineResult<()> {
    const NAME: &str = "policy";

    if policy.daily_standard_hours <= Decimal::ZERO {
        return Err(table_error(NAME, "daily standard hours must be positive"));
    }
    if policy.overtime_multiplier < Decimal::ONE {
        return Err(table_error(NAME, "overtime multiplier must be at least 1"));
    }
    Ok(())
}
