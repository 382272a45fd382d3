//! Response types for the shift engine API.
//!
//! This module defines the success bodies, the error response structure
//! and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::ShiftStatusReport;
use crate::error::EngineError;
use crate::models::ShiftTemplate;

/// Response body for `GET /templates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplatesResponse {
    /// Catalog name.
    pub catalog: String,
    /// Catalog version.
    pub version: String,
    /// Templates in display order.
    pub templates: Vec<ShiftTemplate>,
}

/// Response body for `POST /duration`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationResponse {
    /// Shift length in hours.
    pub hours: Decimal,
}

/// Response body for `POST /shifts/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// The instant every shift was classified against.
    pub evaluated_at: NaiveDateTime,
    /// One report per input shift, in input order.
    pub shifts: Vec<ShiftStatusReport>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
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
        let message = error.to_string();
        let (status, error) = match error {
            EngineError::InvalidClockTime { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_CLOCK_TIME",
                    message,
                    "Times must use 24-hour HH:MM notation",
                ),
            ),
            EngineError::InvalidShiftWindow { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_SHIFT_WINDOW",
                    message,
                    "The shift's dates and times do not form a valid window",
                ),
            ),
            EngineError::InvalidPeriod { .. } => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_PERIOD", message),
            ),
            EngineError::UnknownShiftTemplate { key } => (
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "UNKNOWN_SHIFT_TEMPLATE",
                    message,
                    format!("The template '{}' is not in the catalog", key),
                ),
            ),
            EngineError::InvalidTemplate { .. }
            | EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            ),
        };
        ApiErrorResponse { status, error }
    }
}
