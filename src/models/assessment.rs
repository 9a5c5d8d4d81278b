//! Wage assessment result model.
//!
//! This module defines the result of one wage calculation: the six rounded
//! monetary figures and the compliance verdict, serialized with the wire
//! field names the calculator endpoint has always used.

use serde::{Deserialize, Serialize};

/// The compliance verdict for a reported wage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    /// Total actual pay meets or exceeds the legal monthly minimum.
    /// A difference of exactly zero counts as meeting.
    Meets,
    /// Total actual pay falls short of the legal monthly minimum.
    Underpaid,
}

/// The result of one wage calculation.
///
/// All monetary figures are whole Baht, rounded half away from zero from the
/// underlying decimal arithmetic. A negative `difference` keeps its sign
/// after rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WageAssessment {
    /// Legal monthly minimum: minimum daily wage x days worked x 4.33.
    pub legal_monthly: i64,
    /// Actual monthly base pay: reported daily wage x days worked x 4.33.
    pub actual_monthly: i64,
    /// Monthly overtime supplement.
    pub overtime_pay: i64,
    /// Monthly holiday-work supplement.
    pub holiday_pay: i64,
    /// Actual monthly base pay plus both supplements.
    pub total_actual: i64,
    /// `total_actual - legal_monthly`; negative when underpaid.
    pub difference: i64,
    /// The compliance verdict.
    pub status: ComplianceStatus,
}
