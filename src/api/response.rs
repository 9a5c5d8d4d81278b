//! Response types for the wage compliance API.
//!
//! This module defines the error response structure (the `{error, details?}`
//! wire shape the calculator has always returned) and the minimum-wage table
//! row served by the info endpoint.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::config::WageRecord;
use crate::error::EngineError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable error message.
    pub error: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }

    /// The invalid-province client error.
    pub fn invalid_province() -> Self {
        Self::new("Invalid province code")
    }

    /// The generic server-side calculation fault.
    pub fn calculation_error(details: impl Into<String>) -> Self {
        Self::with_details("Calculation error", details)
    }

    /// The malformed-request-body client error.
    pub fn invalid_body(details: impl Into<String>) -> Self {
        Self::with_details("Invalid request body", details)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            // The one domain error: caller-correctable, no internals leaked.
            EngineError::ProvinceNotFound { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_province(),
            },
            other => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::calculation_error(other.to_string()),
            },
        }
    }
}

/// One row of the minimum-wage table listing.
///
/// Carries the wage both as `min_daily_wage` and as the `wage` alias the
/// public front end reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MinimumWageRow {
    /// The province name.
    pub province: String,
    /// Optional sub-zone or rate-tier label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Legal minimum daily wage in Baht.
    pub min_daily_wage: f64,
    /// Alias of `min_daily_wage`.
    pub wage: f64,
}

impl From<&WageRecord> for MinimumWageRow {
    fn from(record: &WageRecord) -> Self {
        let wage = record.min_daily_wage.to_f64().unwrap_or(0.0);
        Self {
            province: record.province.clone(),
            note: record.note.clone(),
            min_daily_wage: wage,
            wage,
        }
    }
}
