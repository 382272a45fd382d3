//! Integration tests for the shift engine HTTP API.
//!
//! This test suite covers:
//! - Template catalog listing
//! - Duration from clock times (same day, overnight, 24h)
//! - Status classification around an overnight shift
//! - Period summaries and month-end attribution
//! - Assignment from templates
//! - Error cases

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use tower::ServiceExt;

use shift_engine::api::{AppState, create_router};
use shift_engine::calculation::FixedClock;
use shift_engine::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

fn create_router_at(now: &str) -> Router {
    let config = ConfigLoader::load("./config/ips_virtual").expect("Failed to load config");
    create_router(AppState::with_clock(config, Arc::new(FixedClock::new(at(now)))))
}

fn create_router_for_test() -> Router {
    create_router_at("2024-01-10 23:00")
}

/// Normalize decimal string by removing trailing zeros after decimal point
fn normalize_decimal(s: &str) -> String {
    Decimal::from_str(s).unwrap().normalize().to_string()
}

fn assert_decimal(value: &Value, expected: &str) {
    let actual = value
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string());
    assert_eq!(
        normalize_decimal(&actual),
        normalize_decimal(expected),
        "Expected {}, got {}",
        expected,
        actual
    );
}

async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(match body {
                    Some(body) => Body::from(body.to_string()),
                    None => Body::empty(),
                })
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn post(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(router, "POST", uri, Some(body)).await
}

#[allow(clippy::too_many_arguments)]
fn create_shift(
    id: &str,
    doctor_id: &str,
    kind: &str,
    start_date: &str,
    end_date: &str,
    start_time: &str,
    end_time: &str,
    is_night: bool,
) -> Value {
    json!({
        "id": id,
        "doctor_id": doctor_id,
        "doctor_name": format!("Dr. {}", doctor_id),
        "start_date": start_date,
        "end_date": end_date,
        "start_time": start_time,
        "end_time": end_time,
        "type": kind,
        "is_night": is_night,
        "night_surcharge_percent": if is_night { 35 } else { 0 },
        "spans_midnight": start_date != end_date
    })
}

fn overnight_shift() -> Value {
    create_shift(
        "turno_noche",
        "ana",
        "12h-night",
        "2024-01-10",
        "2024-01-11",
        "19:00",
        "07:00",
        true,
    )
}

async fn status_at(now: &str) -> String {
    let (status, body) = post(
        create_router_for_test(),
        "/shifts/status",
        json!({ "shifts": [overnight_shift()], "now": now }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["shifts"][0]["status"].as_str().unwrap().to_string()
}

// =============================================================================
// SECTION 1: Template Catalog
// =============================================================================

#[tokio::test]
async fn test_templates_in_catalog_order() {
    let (status, body) = send(create_router_for_test(), "GET", "/templates", None).await;

    assert_eq!(status, StatusCode::OK);
    let keys: Vec<&str> = body["templates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, vec!["day", "evening", "night", "12h-day", "12h-night", "24h"]);
}

#[tokio::test]
async fn test_template_24h_is_flagged_spanning_and_night() {
    let (_, body) = send(create_router_for_test(), "GET", "/templates", None).await;
    let full = &body["templates"][5];

    assert_eq!(full["start_time"], "07:00");
    assert_eq!(full["end_time"], "07:00");
    assert_eq!(full["spans_midnight"], true);
    assert_eq!(full["is_night"], true);
    assert_decimal(&full["duration_hours"], "24");
}

// =============================================================================
// SECTION 2: Duration
// =============================================================================

#[tokio::test]
async fn test_duration_same_day() {
    let (status, body) = post(
        create_router_for_test(),
        "/duration",
        json!({ "start_time": "07:00", "end_time": "13:00" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_decimal(&body["hours"], "6");
}

#[tokio::test]
async fn test_duration_overnight() {
    let (_, body) = post(
        create_router_for_test(),
        "/duration",
        json!({ "start_time": "19:00", "end_time": "07:00" }),
    )
    .await;
    assert_decimal(&body["hours"], "12");
}

#[tokio::test]
async fn test_duration_equal_times_is_full_cycle() {
    let (_, body) = post(
        create_router_for_test(),
        "/duration",
        json!({ "start_time": "07:00", "end_time": "07:00" }),
    )
    .await;
    assert_decimal(&body["hours"], "24");
}

#[tokio::test]
async fn test_duration_fractional() {
    let (_, body) = post(
        create_router_for_test(),
        "/duration",
        json!({ "start_time": "07:00", "end_time": "14:30" }),
    )
    .await;
    assert_decimal(&body["hours"], "7.5");
}

// =============================================================================
// SECTION 3: Status Classification
// =============================================================================

#[tokio::test]
async fn test_status_before_start_is_upcoming() {
    assert_eq!(status_at("2024-01-10T18:00:00").await, "upcoming");
}

#[tokio::test]
async fn test_status_before_midnight_is_active() {
    assert_eq!(status_at("2024-01-10T23:00:00").await, "active");
}

#[tokio::test]
async fn test_status_end_boundary_is_active() {
    assert_eq!(status_at("2024-01-11T07:00:00").await, "active");
}

#[tokio::test]
async fn test_status_after_end_is_finished() {
    assert_eq!(status_at("2024-01-11T07:01:00").await, "finished");
}

#[tokio::test]
async fn test_status_ignores_persisted_status_field() {
    let mut shift = overnight_shift();
    shift["status"] = json!("finished");

    let (_, body) = post(
        create_router_for_test(),
        "/shifts/status",
        json!({ "shifts": [shift], "now": "2024-01-10T23:00:00" }),
    )
    .await;
    assert_eq!(body["shifts"][0]["status"], "active");
}

#[tokio::test]
async fn test_status_defaults_to_server_clock() {
    let (_, body) = post(
        create_router_at("2024-01-11 08:00"),
        "/shifts/status",
        json!({ "shifts": [overnight_shift()] }),
    )
    .await;
    assert_eq!(body["evaluated_at"], "2024-01-11T08:00:00");
    assert_eq!(body["shifts"][0]["status"], "finished");
}

#[tokio::test]
async fn test_status_isolates_invalid_window() {
    let broken = create_shift(
        "turno_roto",
        "luis",
        "night",
        "2024-01-10",
        "2024-01-10",
        "19:00",
        "07:00",
        true,
    );

    let (status, body) = post(
        create_router_for_test(),
        "/shifts/status",
        json!({ "shifts": [broken, overnight_shift()], "now": "2024-01-10T23:00:00" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["shifts"][0].get("status").is_none());
    assert!(
        body["shifts"][0]["error"]
            .as_str()
            .unwrap()
            .contains("turno_roto")
    );
    assert_eq!(body["shifts"][1]["status"], "active");
}

#[tokio::test]
async fn test_status_reports_resolved_window() {
    let (_, body) = post(
        create_router_for_test(),
        "/shifts/status",
        json!({ "shifts": [overnight_shift()], "now": "2024-01-10T23:00:00" }),
    )
    .await;

    assert_eq!(body["shifts"][0]["window"]["start"], "2024-01-10T19:00:00");
    assert_eq!(body["shifts"][0]["window"]["end"], "2024-01-11T07:00:00");
    assert_decimal(&body["shifts"][0]["hours"], "12");
}

// =============================================================================
// SECTION 4: Period Summary
// =============================================================================

fn january_roster() -> Vec<Value> {
    vec![
        create_shift("t1", "ana", "day", "2024-01-08", "2024-01-08", "07:00", "13:00", false),
        overnight_shift(),
        create_shift("t3", "luis", "12h-day", "2024-01-14", "2024-01-14", "07:00", "19:00", false),
        create_shift("t4", "ana", "evening", "2024-01-12", "2024-01-12", "13:00", "19:00", false),
        create_shift("t5", "luis", "24h", "2024-01-31", "2024-02-01", "07:00", "07:00", true),
        create_shift("t6", "luis", "day", "2024-02-02", "2024-02-02", "07:00", "13:00", false),
    ]
}

#[tokio::test]
async fn test_summary_totals_for_month() {
    let (status, body) = post(
        create_router_for_test(),
        "/shifts/summary",
        json!({ "shifts": january_roster(), "period": "2024-01", "now": "2024-01-10T23:00:00" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    // 6 + 12 + 12 + 6 + 24
    assert_decimal(&body["total_hours"], "60");
    assert_decimal(&body["night_hours"], "36");
    assert_decimal(&body["surcharge_hours"], "12.6");
    assert_eq!(body["active_shift_id"], "turno_noche");
    assert_eq!(body["next_shift_id"], "t4");
    assert_eq!(body["status_counts"]["upcoming"], 4);
    assert_eq!(body["status_counts"]["finished"], 1);
    assert_eq!(body["status_counts"]["active"], 1);
}

#[tokio::test]
async fn test_summary_month_end_shift_stays_in_start_month() {
    let (_, february) = post(
        create_router_for_test(),
        "/shifts/summary",
        json!({ "shifts": january_roster(), "period": "2024-02", "now": "2024-01-10T23:00:00" }),
    )
    .await;

    // Only t6; the 24h shift starting 2024-01-31 belongs to January.
    assert_decimal(&february["total_hours"], "6");
    assert_decimal(&february["night_hours"], "0");
}

#[tokio::test]
async fn test_summary_breaks_down_by_doctor() {
    let (_, body) = post(
        create_router_for_test(),
        "/shifts/summary",
        json!({ "shifts": january_roster(), "period": "2024-01", "now": "2024-01-10T23:00:00" }),
    )
    .await;

    let rows = body["by_doctor"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["doctor_id"], "ana");
    assert_eq!(rows[0]["shift_count"], 3);
    assert_decimal(&rows[0]["total_hours"], "24");
    assert_eq!(rows[1]["doctor_id"], "luis");
    assert_decimal(&rows[1]["total_hours"], "36");
    assert_decimal(&rows[1]["night_hours"], "24");
}

#[tokio::test]
async fn test_summary_with_no_shifts() {
    let (status, body) = post(
        create_router_for_test(),
        "/shifts/summary",
        json!({ "shifts": [], "period": "2024-01" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_decimal(&body["total_hours"], "0");
    assert!(body["active_shift_id"].is_null());
    assert!(body["next_shift_id"].is_null());
}

// =============================================================================
// SECTION 5: Assignment
// =============================================================================

#[tokio::test]
async fn test_assign_night_template_ends_next_day() {
    let (status, body) = post(
        create_router_for_test(),
        "/shifts/assign",
        json!({
            "template": "12h-night",
            "id": "turno_500",
            "doctor_id": "doc_4",
            "doctor_name": "Enf. Castro",
            "doctor_role": "enfermera",
            "start_date": "2024-01-31",
            "area": "Hospitalización"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], "turno_500");
    assert_eq!(body["type"], "12h-night");
    assert_eq!(body["end_date"], "2024-02-01");
    assert_eq!(body["start_time"], "19:00");
    assert_eq!(body["spans_midnight"], true);
    assert_decimal(&body["night_surcharge_percent"], "35");
}

#[tokio::test]
async fn test_assigned_shift_round_trips_through_status() {
    let (_, shift) = post(
        create_router_for_test(),
        "/shifts/assign",
        json!({
            "template": "24h",
            "doctor_id": "doc_4",
            "doctor_name": "Dr. Castro",
            "start_date": "2024-01-10"
        }),
    )
    .await;
    assert!(shift["id"].as_str().is_some_and(|id| !id.is_empty()));

    let (_, body) = post(
        create_router_for_test(),
        "/shifts/status",
        json!({ "shifts": [shift], "now": "2024-01-11T06:59:00" }),
    )
    .await;
    assert_eq!(body["shifts"][0]["status"], "active");
}

// =============================================================================
// SECTION 6: Error Cases
// =============================================================================

#[tokio::test]
async fn test_malformed_json_returns_400() {
    let response = create_router_for_test()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/shifts/summary")
                .header("Content-Type", "application/json")
                .body(Body::from("{ invalid json }"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_invalid_clock_time_returns_400() {
    let (status, body) = post(
        create_router_for_test(),
        "/duration",
        json!({ "start_time": "25:00", "end_time": "07:00" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("25:00"));
}

#[tokio::test]
async fn test_invalid_period_returns_400() {
    let (status, body) = post(
        create_router_for_test(),
        "/shifts/summary",
        json!({ "shifts": [], "period": "enero-2024" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_summary_rejects_out_of_range_stored_duration() {
    for hours in ["-12", "79228162514264337593543950335"] {
        let mut shift = overnight_shift();
        shift["duration_hours"] = json!(hours);
        let (status, body) = post(
            create_router_for_test(),
            "/shifts/summary",
            json!({ "shifts": [shift.clone(), shift], "period": "2024-01" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "duration_hours {}", hours);
        assert_eq!(body["code"], "VALIDATION_ERROR");
        assert!(body["message"].as_str().unwrap().contains("duration_hours"));
    }
}

#[tokio::test]
async fn test_summary_rejects_out_of_range_surcharge() {
    let mut shift = overnight_shift();
    shift["night_surcharge_percent"] = json!(150);
    let (status, body) = post(
        create_router_for_test(),
        "/shifts/summary",
        json!({ "shifts": [shift], "period": "2024-01" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_unknown_template_key_returns_400() {
    let (status, _) = post(
        create_router_for_test(),
        "/shifts/assign",
        json!({
            "template": "36h",
            "doctor_id": "doc_4",
            "doctor_name": "Dr. Castro",
            "start_date": "2024-01-10"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_field_returns_400() {
    let (status, body) = post(
        create_router_for_test(),
        "/shifts/status",
        json!({ "now": "2024-01-10T23:00:00" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("missing field"));
}
