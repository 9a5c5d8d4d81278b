//! Minimum-wage compliance engine for Thailand provincial wage rates.
//!
//! This crate resolves a province (or province sub-zone) to its legal minimum
//! daily wage and computes legal vs. actual monthly pay, overtime and holiday
//! supplements, and a compliance verdict for a worker-reported wage.

#![warn(missing_docs)]

pub mod api;
pub mod audit;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
