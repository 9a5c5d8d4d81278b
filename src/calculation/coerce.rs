//! Parse-or-zero numeric coercion.
//!
//! The calculator endpoint deliberately fails open to zero: any numeric field
//! that is missing, null, or fails to parse contributes zero to the
//! computation instead of rejecting the request. This module makes that
//! policy a single visible helper rather than an incidental serde fallback.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Coerces a JSON value to a `Decimal`, mapping anything non-numeric to zero.
///
/// Accepted: JSON numbers and strings holding a number (plain or scientific
/// notation, surrounding whitespace ignored). Everything else — null, bools,
/// arrays, objects, garbage strings — coerces to zero. This is not a
/// validation failure; it is the documented permissive policy of the
/// calculator.
///
/// # Example
///
/// ```
/// use rust_decimal::Decimal;
/// use serde_json::json;
/// use wage_engine::calculation::parse_or_zero;
///
/// assert_eq!(parse_or_zero(&json!(400)), Decimal::from(400));
/// assert_eq!(parse_or_zero(&json!("6.5")), Decimal::new(65, 1));
/// assert_eq!(parse_or_zero(&json!("not-a-number")), Decimal::ZERO);
/// ```
pub fn parse_or_zero(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => parse_str(&n.to_string()),
        Value::String(s) => parse_str(s.trim()),
        _ => Decimal::ZERO,
    }
}

fn parse_str(s: &str) -> Decimal {
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .unwrap_or(Decimal::ZERO)
}

/// Serde adapter applying [`parse_or_zero`] to a request field.
///
/// Use with `#[serde(default, deserialize_with = "lenient::deserialize")]` so
/// that both absent fields and unparseable fields land on zero.
pub mod lenient {
    use super::*;
    use serde::{Deserialize, Deserializer};

    /// Deserializes any JSON value into a `Decimal`, coercing to zero.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().map(parse_or_zero).unwrap_or(Decimal::ZERO))
    }
}
