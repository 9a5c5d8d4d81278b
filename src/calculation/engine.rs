//! The wage calculation engine.
//!
//! This module provides [`WageEngine`], a stateless pure computation over the
//! immutable registry and multipliers it is constructed with. Each call to
//! [`WageEngine::calculate`] is independent; any number of calls may run
//! concurrently with no locking.

use rust_decimal::Decimal;

use crate::config::{WageDataset, WageMultipliers};
use crate::error::EngineResult;
use crate::models::{CalculationInput, ComplianceStatus, WageAssessment};
use crate::registry::WageRegistry;

use super::rounding::round_to_baht;

/// Weeks-per-month approximation used to scale weekly pay to monthly pay.
///
/// A fixed policy constant: exactly 4.33, never derived from calendar days.
pub const WEEKS_PER_MONTH: Decimal = Decimal::from_parts(433, 0, 0, false, 2);

/// Divisor converting a daily wage to an hourly rate.
///
/// Fixed at 8 hours regardless of the hours actually worked per day; a policy
/// simplification of the calculator.
pub const STANDARD_DAILY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Computes legal vs. actual pay and a compliance verdict.
///
/// The engine owns the registry and multipliers it was constructed with and
/// never mutates them, so a single engine instance serves all requests.
///
/// # Example
///
/// ```no_run
/// use wage_engine::calculation::WageEngine;
/// use wage_engine::config::ConfigLoader;
/// use wage_engine::models::CalculationInput;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/thailand")?;
/// let engine = WageEngine::from_dataset(loader.into_dataset())?;
///
/// let assessment = engine.calculate(&CalculationInput {
///     province_key: "Phuket".to_string(),
///     user_daily_wage: Decimal::from(420),
///     days_worked: Decimal::from(6),
///     overtime_hours_per_day: Decimal::ZERO,
///     holiday_hours_per_month: Decimal::ZERO,
/// })?;
/// println!("Verdict: {:?}", assessment.status);
/// # Ok::<(), wage_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct WageEngine {
    registry: WageRegistry,
    multipliers: WageMultipliers,
}

impl WageEngine {
    /// Creates an engine from an already-built registry and multipliers.
    pub fn new(registry: WageRegistry, multipliers: WageMultipliers) -> Self {
        Self {
            registry,
            multipliers,
        }
    }

    /// Creates an engine from a loaded dataset, building the registry.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateWageRecord` if the dataset violates the
    /// `(province, normalized note)` uniqueness invariant.
    pub fn from_dataset(dataset: WageDataset) -> EngineResult<Self> {
        let (records, multipliers) = dataset.into_parts();
        Ok(Self::new(WageRegistry::new(records)?, multipliers))
    }

    /// Returns the province wage registry.
    pub fn registry(&self) -> &WageRegistry {
        &self.registry
    }

    /// Returns the multiplier constants.
    pub fn multipliers(&self) -> WageMultipliers {
        self.multipliers
    }

    /// Computes the wage assessment for one calculation input.
    ///
    /// Resolves the province key, computes legal and actual monthly pay, the
    /// overtime and holiday supplements, and the verdict. Overtime is entered
    /// per day and scaled per week then per month; holiday hours are entered
    /// per month and are deliberately not scaled by the weeks-per-month
    /// constant. A difference of exactly zero counts as meeting the minimum.
    ///
    /// # Errors
    ///
    /// Returns `ProvinceNotFound` when the key does not resolve — the one
    /// domain error; no partial result is produced. Any other failure is a
    /// server-side `CalculationError`.
    pub fn calculate(&self, input: &CalculationInput) -> EngineResult<WageAssessment> {
        let record = self.registry.resolve(&input.province_key)?;
        let min_daily_wage = record.min_daily_wage;

        let legal_weekly = min_daily_wage * input.days_worked;
        let legal_monthly = legal_weekly * WEEKS_PER_MONTH;

        let actual_weekly = input.user_daily_wage * input.days_worked;
        let actual_monthly = actual_weekly * WEEKS_PER_MONTH;

        let hourly_rate = input.user_daily_wage / STANDARD_DAILY_HOURS;

        let overtime_pay = hourly_rate
            * input.overtime_hours_per_day
            * input.days_worked
            * self.multipliers.overtime_weekday_multiplier
            * WEEKS_PER_MONTH;

        let holiday_pay =
            hourly_rate * input.holiday_hours_per_month * self.multipliers.holiday_work_multiplier;

        let total_actual = actual_monthly + overtime_pay + holiday_pay;
        let difference = total_actual - legal_monthly;

        let status = if difference >= Decimal::ZERO {
            ComplianceStatus::Meets
        } else {
            ComplianceStatus::Underpaid
        };

        Ok(WageAssessment {
            legal_monthly: round_to_baht(legal_monthly)?,
            actual_monthly: round_to_baht(actual_monthly)?,
            overtime_pay: round_to_baht(overtime_pay)?,
            holiday_pay: round_to_baht(holiday_pay)?,
            total_actual: round_to_baht(total_actual)?,
            difference: round_to_baht(difference)?,
            status,
        })
    }
}
