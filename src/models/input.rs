//! Calculation input model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The inputs to one wage calculation.
///
/// Numeric fields are already coerced at the request boundary (parse-or-zero
/// policy); by the time an input reaches the engine every field holds a
/// concrete value. The domain of `days_worked` is 0 to 7 days per week in
/// practice, but the engine does not enforce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Composite province key: `"<province>"` or `"<province>--<note>"`.
    pub province_key: String,
    /// Daily wage the worker reports actually receiving, in Baht.
    pub user_daily_wage: Decimal,
    /// Days worked per week.
    pub days_worked: Decimal,
    /// Overtime hours worked per day.
    pub overtime_hours_per_day: Decimal,
    /// Hours worked on holidays per month.
    pub holiday_hours_per_month: Decimal,
}
