//! Calculation logic for the wage compliance engine.
//!
//! This module contains the numeric coercion policy applied at the request
//! boundary, the whole-Baht rounding policy, and the [`WageEngine`] that
//! computes legal vs. actual pay and the compliance verdict.

mod coerce;
mod engine;
mod rounding;

pub use coerce::{lenient, parse_or_zero};
pub use engine::{STANDARD_DAILY_HOURS, WEEKS_PER_MONTH, WageEngine};
pub use rounding::round_to_baht;
