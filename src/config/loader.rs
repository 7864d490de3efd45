//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a statutory
//! schedule from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{ContributionsConfig, PayPolicy, ScheduleMetadata, StatutoryConfig, TaxConfig};

/// Loads and provides access to the statutory configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a schedule
/// directory, validates the tables structurally, and hands out the resulting
/// [`StatutoryConfig`].
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/ph2023/
/// ├── schedule.yaml       # Schedule metadata
/// ├── contributions.yaml  # Social-insurance, health-insurance, housing-fund tables
/// ├── tax.yaml            # Withholding-tax brackets
/// └── policy.yaml         # Daily standard hours, overtime multiplier
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/ph2023").unwrap();
/// println!("Schedule version: {}", loader.config().metadata().version);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParse`)
    /// - Any table fails structural validation (`InvalidTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ScheduleMetadata>(&path.join("schedule.yaml"))?;
        let contributions =
            Self::load_yaml::<ContributionsConfig>(&path.join("contributions.yaml"))?;
        let tax = Self::load_yaml::<TaxConfig>(&path.join("tax.yaml"))?;
        let policy = Self::load_yaml::<PayPolicy>(&path.join("policy.yaml"))?;

        let config = StatutoryConfig::new(metadata, contributions, tax, policy)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the validated statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }
}
