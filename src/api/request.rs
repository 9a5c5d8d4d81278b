//! Request types for the wage compliance API.
//!
//! This module defines the JSON request structure for the calculator
//! endpoint. Every field is optional on the wire: a missing province code
//! becomes the empty string (and fails resolution downstream), and numeric
//! fields go through the parse-or-zero coercion policy, so a string like
//! `"not-a-number"` silently contributes zero rather than rejecting the
//! request.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::lenient;
use crate::models::CalculationInput;

/// Request body for the calculator endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WageCalculationRequest {
    /// Composite province key: `"<province>"` or `"<province>--<note>"`.
    #[serde(default)]
    pub province_code: String,
    /// Daily wage the worker reports receiving, numeric-coercible.
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub user_daily_wage: Decimal,
    /// Days worked per week, numeric-coercible.
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub days_worked: Decimal,
    /// Overtime hours per day, numeric-coercible.
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub overtime_hours_per_day: Decimal,
    /// Holiday hours per month, numeric-coercible.
    #[serde(default, deserialize_with = "lenient::deserialize")]
    pub holiday_hours_per_month: Decimal,
}

impl From<WageCalculationRequest> for CalculationInput {
    fn from(req: WageCalculationRequest) -> Self {
        CalculationInput {
            province_key: req.province_code,
            user_daily_wage: req.user_daily_wage,
            days_worked: req.days_worked,
            overtime_hours_per_day: req.overtime_hours_per_day,
            holiday_hours_per_month: req.holiday_hours_per_month,
        }
    }
}
