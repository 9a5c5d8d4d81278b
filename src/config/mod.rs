//! Configuration loading and management for the wage compliance engine.
//!
//! This module provides functionality to load the provincial wage dataset
//! from YAML files, including the minimum-wage table and the overtime and
//! holiday multipliers.
//!
//! # Example
//!
//! ```no_run
//! use wage_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/thailand").unwrap();
//! println!("Loaded {} wage records", loader.records().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{WageDataset, WageMultipliers, WageRecord};
