//! HTTP request handlers for the shift engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{assign_shift, classify_shifts, compute_duration_hours, summarize_shifts};

use super::request::{AssignRequest, DurationRequest, StatusRequest, SummaryRequest};
use super::response::{
    ApiError, ApiErrorResponse, DurationResponse, StatusResponse, TemplatesResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/templates", get(templates_handler))
        .route("/duration", post(duration_handler))
        .route("/shifts/status", post(status_handler))
        .route("/shifts/summary", post(summary_handler))
        .route("/shifts/assign", post(assign_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Unwraps a JSON body, turning extractor rejections into 400 responses.
fn accept_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(body)) => return Ok(body),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    Err(ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
    .into_response())
}

/// Handler for GET /templates.
async fn templates_handler(State(state): State<AppState>) -> Response {
    let config = state.config();
    json_response(
        StatusCode::OK,
        TemplatesResponse {
            catalog: config.metadata().name.clone(),
            version: config.metadata().version.clone(),
            templates: config.templates().to_vec(),
        },
    )
}

/// Handler for POST /duration.
async fn duration_handler(payload: Result<Json<DurationRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match accept_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let hours = compute_duration_hours(request.start_time, request.end_time);
    json_response(StatusCode::OK, DurationResponse { hours })
}

/// Handler for POST /shifts/status.
///
/// Classifies every shift against one instant: the request's `now` when
/// given, otherwise the state clock read once.
async fn status_handler(
    State(state): State<AppState>,
    payload: Result<Json<StatusRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing status request");

    let request = match accept_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let started = Instant::now();
    let now = request.now.unwrap_or_else(|| state.now());
    let reports = classify_shifts(&request.shifts, now);

    let invalid = reports.iter().filter(|r| r.error.is_some()).count();
    if invalid > 0 {
        warn!(
            correlation_id = %correlation_id,
            invalid_shifts = invalid,
            "Some shifts have invalid windows"
        );
    }
    info!(
        correlation_id = %correlation_id,
        shifts_count = reports.len(),
        evaluated_at = %now,
        duration_us = started.elapsed().as_micros(),
        "Status classification completed"
    );

    json_response(
        StatusCode::OK,
        StatusResponse {
            evaluated_at: now,
            shifts: reports,
        },
    )
}

/// Handler for POST /shifts/summary.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing summary request");

    let request = match accept_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let started = Instant::now();
    let now = request.now.unwrap_or_else(|| state.now());
    let summary = summarize_shifts(&request.shifts, &request.period, now);

    info!(
        correlation_id = %correlation_id,
        period = %summary.period,
        shifts_count = request.shifts.len(),
        total_hours = %summary.total_hours,
        duration_us = started.elapsed().as_micros(),
        "Summary completed"
    );

    json_response(StatusCode::OK, summary)
}

/// Handler for POST /shifts/assign.
async fn assign_handler(
    State(state): State<AppState>,
    payload: Result<Json<AssignRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing assignment request");

    let request = match accept_json(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let result = state
        .config()
        .template(request.template)
        .and_then(|template| assign_shift(template, request.into()));

    match result {
        Ok(shift) => {
            info!(
                correlation_id = %correlation_id,
                shift_id = %shift.id,
                template = %shift.shift_type,
                "Shift assigned"
            );
            json_response(StatusCode::CREATED, shift)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Assignment failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
