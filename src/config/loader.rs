//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the provincial
//! wage dataset from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{MultipliersConfig, WageDataset, WageMultipliers, WageRecord, WageTableConfig};

/// Loads and provides access to the wage dataset.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides the minimum-wage table and multiplier constants. The dataset is
/// loaded once at process start and never mutated afterwards.
///
/// # Directory Structure
///
/// ```text
/// config/thailand/
/// ├── wages.yaml        # Provincial minimum-wage records
/// └── multipliers.yaml  # Overtime and holiday multipliers
/// ```
///
/// # Example
///
/// ```no_run
/// use wage_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/thailand").unwrap();
/// println!("Overtime multiplier: {}", loader.multipliers().overtime_weekday_multiplier);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    dataset: WageDataset,
}

impl ConfigLoader {
    /// Loads the wage dataset from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/thailand")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Either required file is missing
    /// - Either file contains invalid YAML
    /// - A multiplier is zero or negative
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let wages_path = path.join("wages.yaml");
        let wage_table = Self::load_yaml::<WageTableConfig>(&wages_path)?;

        let multipliers_path = path.join("multipliers.yaml");
        let multipliers_config = Self::load_yaml::<MultipliersConfig>(&multipliers_path)?;

        Self::validate_multipliers(&multipliers_path, multipliers_config.multipliers)?;

        let dataset = WageDataset::new(wage_table.records, multipliers_config.multipliers);

        Ok(Self { dataset })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects zero or negative multipliers.
    fn validate_multipliers(path: &Path, multipliers: WageMultipliers) -> EngineResult<()> {
        let invalid = if multipliers.overtime_weekday_multiplier <= Decimal::ZERO {
            Some("overtime_weekday_multiplier")
        } else if multipliers.holiday_work_multiplier <= Decimal::ZERO {
            Some("holiday_work_multiplier")
        } else {
            None
        };

        match invalid {
            Some(field) => Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: format!("{field} must be positive"),
            }),
            None => Ok(()),
        }
    }

    /// Returns the loaded dataset.
    pub fn dataset(&self) -> &WageDataset {
        &self.dataset
    }

    /// Returns the wage records in dataset order.
    pub fn records(&self) -> &[WageRecord] {
        self.dataset.records()
    }

    /// Returns the multiplier constants.
    pub fn multipliers(&self) -> WageMultipliers {
        self.dataset.multipliers()
    }

    /// Consumes the loader, returning the dataset.
    pub fn into_dataset(self) -> WageDataset {
        self.dataset
    }
}
