//! End-to-end tests for the wage compliance API.
//!
//! These tests exercise the full stack — shipped dataset, registry, engine,
//! router, audit sink — through in-process HTTP requests.

use std::fs;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use wage_engine::api::{AppState, create_router};
use wage_engine::audit::JsonlAuditSink;
use wage_engine::calculation::WageEngine;
use wage_engine::config::ConfigLoader;

fn shipped_engine() -> WageEngine {
    let loader = ConfigLoader::load("./config/thailand").expect("Failed to load config");
    WageEngine::from_dataset(loader.into_dataset()).expect("Failed to build engine")
}

fn state_with_audit_file(path: &std::path::Path) -> AppState {
    let sink = JsonlAuditSink::open(path).expect("Failed to open audit log");
    AppState::new(shipped_engine(), Arc::new(sink))
}

fn state() -> AppState {
    AppState::new(
        shipped_engine(),
        Arc::new(JsonlAuditSink::with_writer(std::io::sink())),
    )
}

async fn post_calculate(state: AppState, body: &str) -> axum::response::Response {
    create_router(state)
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calculate-wage")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_compliant_wage_scenario() {
    // Minimum 350 (Nakhon Sawan), 6 days, reported 400: meets by 1299 Baht.
    let body = r#"{
        "provinceCode": "Nakhon Sawan",
        "userDailyWage": 400,
        "daysWorked": 6,
        "overtimeHoursPerDay": 0,
        "holidayHoursPerMonth": 0
    }"#;

    let response = post_calculate(state(), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["legalMonthly"], 9093);
    assert_eq!(json["actualMonthly"], 10392);
    assert_eq!(json["overtimePay"], 0);
    assert_eq!(json["holidayPay"], 0);
    assert_eq!(json["totalActual"], 10392);
    assert_eq!(json["difference"], 1299);
    assert_eq!(json["status"], "meets");
}

#[tokio::test]
async fn test_underpaid_wage_scenario() {
    // Same province, reported 300: short by 1299 Baht.
    let body = r#"{
        "provinceCode": "Nakhon Sawan",
        "userDailyWage": 300,
        "daysWorked": 6
    }"#;

    let response = post_calculate(state(), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["actualMonthly"], 7794);
    assert_eq!(json["difference"], -1299);
    assert_eq!(json["status"], "underpaid");
}

#[tokio::test]
async fn test_overtime_and_holiday_supplements() {
    let body = r#"{
        "provinceCode": "Bangkok",
        "userDailyWage": 372,
        "daysWorked": 6,
        "overtimeHoursPerDay": 2,
        "holidayHoursPerMonth": 8
    }"#;

    let response = post_calculate(state(), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    // hourly = 372 / 8 = 46.5
    // overtime = 46.5 * 2 * 6 * 1.5 * 4.33 = 3624.21 -> 3624
    // holiday = 46.5 * 8 * 2.0 = 744 (not scaled by 4.33)
    assert_eq!(json["overtimePay"], 3624);
    assert_eq!(json["holidayPay"], 744);
    assert_eq!(json["status"], "meets");
}

#[tokio::test]
async fn test_sub_zone_tier_changes_verdict() {
    // 380 meets the Surat Thani base tier (357)...
    let base = post_calculate(
        state(),
        r#"{"provinceCode": "Surat Thani", "userDailyWage": 380, "daysWorked": 6}"#,
    )
    .await;
    assert_eq!(body_json(base).await["status"], "meets");

    // ...but not the Ko Samui tier (400), whatever the note's spelling.
    let samui = post_calculate(
        state(),
        r#"{"provinceCode": "Surat Thani--Ko Samui", "userDailyWage": 380, "daysWorked": 6}"#,
    )
    .await;
    assert_eq!(body_json(samui).await["status"], "underpaid");

    let samui_loose = post_calculate(
        state(),
        r#"{"provinceCode": "Surat Thani--KOSAMUI", "userDailyWage": 380, "daysWorked": 6}"#,
    )
    .await;
    assert_eq!(body_json(samui_loose).await["status"], "underpaid");
}

#[tokio::test]
async fn test_invalid_province_wire_contract() {
    let response = post_calculate(
        state(),
        r#"{"provinceCode": "Nonexistent", "userDailyWage": 400, "daysWorked": 6}"#,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        serde_json::json!({"error": "Invalid province code"})
    );
}

#[tokio::test]
async fn test_missing_province_code_is_invalid() {
    let response = post_calculate(state(), r#"{"userDailyWage": 400, "daysWorked": 6}"#).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid province code");
}

#[tokio::test]
async fn test_numeric_coercion_fails_open_to_zero() {
    let body = r#"{
        "provinceCode": "Bangkok",
        "userDailyWage": "not-a-number",
        "daysWorked": "6",
        "overtimeHoursPerDay": null,
        "holidayHoursPerMonth": [1, 2]
    }"#;

    let response = post_calculate(state(), body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    // Wage coerced to zero, days parsed from its string form.
    assert_eq!(json["actualMonthly"], 0);
    assert_eq!(json["legalMonthly"], 9665); // 372 * 6 * 4.33 = 9664.56
    assert_eq!(json["status"], "underpaid");
}

#[tokio::test]
async fn test_identical_requests_yield_identical_responses() {
    let body = r#"{
        "provinceCode": "Phuket",
        "userDailyWage": 415,
        "daysWorked": 5.5,
        "overtimeHoursPerDay": 1.5,
        "holidayHoursPerMonth": 4
    }"#;

    let first = body_json(post_calculate(state(), body).await).await;
    let second = body_json(post_calculate(state(), body).await).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_minimum_wages_listing_serves_full_table() {
    let response = create_router(state())
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/info/minimum-wages")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json.as_array().unwrap();
    assert!(rows.len() >= 30);

    // Every row carries the frontend alias.
    for row in rows {
        assert_eq!(row["wage"], row["min_daily_wage"]);
    }

    // The noted Ko Samui tier is listed alongside the base record.
    assert!(
        rows.iter()
            .any(|r| r["province"] == "Surat Thani" && r["note"] == "Ko Samui")
    );
    assert!(
        rows.iter()
            .any(|r| r["province"] == "Surat Thani" && r.get("note").is_none())
    );
}

#[tokio::test]
async fn test_successful_calculation_appends_audit_line() {
    let dir = tempfile::tempdir().unwrap();
    let audit_path = dir.path().join("calculations.jsonl");
    let state = state_with_audit_file(&audit_path);

    let response = post_calculate(
        state,
        r#"{"provinceCode": "Bangkok", "userDailyWage": 400, "daysWorked": 6}"#,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // The audit write is fire-and-forget; poll briefly for it to land.
    let mut lines = Vec::new();
    for _ in 0..100 {
        let content = fs::read_to_string(&audit_path).unwrap_or_default();
        lines = content.lines().map(String::from).collect();
        if !lines.is_empty() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    assert_eq!(lines.len(), 1);
    let record: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(record["input"]["province_key"], "Bangkok");
    assert_eq!(record["result"]["status"], "meets");
    assert!(record["id"].is_string());
    assert!(record["timestamp"].is_string());
}

#[tokio::test]
async fn test_rejected_calculation_leaves_audit_log_empty() {
    let dir = tempfile::tempdir().unwrap();
    let audit_path = dir.path().join("calculations.jsonl");
    let state = state_with_audit_file(&audit_path);

    let response = post_calculate(state, r#"{"provinceCode": "Nonexistent"}"#).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    tokio::time::sleep(Duration::from_millis(20)).await;
    let content = fs::read_to_string(&audit_path).unwrap_or_default();
    assert!(content.is_empty());
}
