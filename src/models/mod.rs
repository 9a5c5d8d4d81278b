//! Core data models for the wage compliance engine.

mod assessment;
mod input;

pub use assessment::{ComplianceStatus, WageAssessment};
pub use input::CalculationInput;
