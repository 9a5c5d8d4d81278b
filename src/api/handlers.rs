//! HTTP request handlers for the wage compliance API.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::audit::AuditRecord;
use crate::models::CalculationInput;

use super::request::WageCalculationRequest;
use super::response::{ApiError, ApiErrorResponse, MinimumWageRow};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/calculate-wage", post(calculate_handler))
        .route("/api/info/minimum-wages", get(minimum_wages_handler))
        .with_state(state)
}

/// Handler for POST /api/calculate-wage.
///
/// Accepts the calculator request, runs the engine, and returns the
/// assessment. On success an audit record is dispatched fire-and-forget
/// after the response value is built; its outcome never affects the
/// response.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<WageCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    // Field-level leniency is handled by the parse-or-zero deserializer, so a
    // rejection here means the body itself was not valid JSON.
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Rejected request body"
            );
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(ApiError::invalid_body(rejection.body_text())),
            )
                .into_response();
        }
    };

    let input: CalculationInput = request.into();
    info!(
        correlation_id = %correlation_id,
        province_key = %input.province_key,
        "Processing calculation request"
    );

    let start_time = Instant::now();
    match state.engine().calculate(&input) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                total_actual = result.total_actual,
                status = ?result.status,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed"
            );

            let sink = state.audit();
            let record = AuditRecord::new(input, result);
            tokio::task::spawn_blocking(move || {
                if let Err(err) = sink.append(&record) {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "Audit write failed"
                    );
                }
            });

            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for GET /api/info/minimum-wages.
///
/// Serves the full wage table in registry order.
async fn minimum_wages_handler(State(state): State<AppState>) -> Json<Vec<MinimumWageRow>> {
    let rows = state
        .engine()
        .registry()
        .records()
        .iter()
        .map(MinimumWageRow::from)
        .collect();
    Json(rows)
}
