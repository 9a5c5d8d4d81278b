//! Configuration types for the provincial wage dataset.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A minimum-wage record for one province, or one province sub-zone.
///
/// The pair `(province, note)` identifies the record: provinces with a single
/// wage tier have no note, provinces with sub-zone tiers (e.g. Ko Samui
/// within Surat Thani) carry one noted record per tier alongside the base
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WageRecord {
    /// The province identifier (Thai province name).
    pub province: String,
    /// Optional sub-zone or rate-tier label disambiguating multi-tier provinces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Legal minimum daily wage in whole Baht. Absent in the dataset means zero.
    #[serde(default)]
    pub min_daily_wage: Decimal,
}

/// Multipliers applied to the hourly rate for supplemental pay.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WageMultipliers {
    /// Factor applied to the hourly rate for weekday overtime hours.
    pub overtime_weekday_multiplier: Decimal,
    /// Factor applied to the hourly rate for hours worked on holidays.
    pub holiday_work_multiplier: Decimal,
}

/// Wage table configuration file structure (`wages.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub(super) struct WageTableConfig {
    /// The minimum-wage records, in dataset order.
    pub records: Vec<WageRecord>,
}

/// Multipliers configuration file structure (`multipliers.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub(super) struct MultipliersConfig {
    /// The multiplier constants.
    pub multipliers: WageMultipliers,
}

/// The complete wage dataset loaded from YAML files.
///
/// Read-only after load; shared by all concurrent calculation requests.
#[derive(Debug, Clone)]
pub struct WageDataset {
    records: Vec<WageRecord>,
    multipliers: WageMultipliers,
}

impl WageDataset {
    /// Creates a new dataset from its component parts.
    pub fn new(records: Vec<WageRecord>, multipliers: WageMultipliers) -> Self {
        Self {
            records,
            multipliers,
        }
    }

    /// Returns the wage records in dataset order.
    pub fn records(&self) -> &[WageRecord] {
        &self.records
    }

    /// Returns the multiplier constants.
    pub fn multipliers(&self) -> WageMultipliers {
        self.multipliers
    }

    /// Consumes the dataset, returning the records and multipliers.
    pub fn into_parts(self) -> (Vec<WageRecord>, WageMultipliers) {
        (self.records, self.multipliers)
    }
}
