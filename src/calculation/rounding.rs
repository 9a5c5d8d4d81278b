//! Whole-Baht rounding policy.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};

/// Rounds a monetary amount to the nearest whole Baht.
///
/// Uses round-half-away-from-zero, so 0.5 rounds to 1 and -0.5 rounds to -1;
/// a negative difference keeps its sign after rounding.
///
/// # Errors
///
/// Returns `CalculationError` if the rounded amount does not fit in an `i64`.
pub fn round_to_baht(amount: Decimal) -> EngineResult<i64> {
    amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("monetary amount out of range: {amount}"),
        })
}
