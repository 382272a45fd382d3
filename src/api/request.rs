//! Request types for the shift engine API.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::calculation::{PeriodPrefix, ShiftAssignment};
use crate::models::{ClockTime, ShiftKind, ShiftRecord};

/// Request body for the `/duration` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DurationRequest {
    /// Wall-clock start time.
    pub start_time: ClockTime,
    /// Wall-clock end time.
    pub end_time: ClockTime,
}

/// Request body for the `/shifts/status` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRequest {
    /// The shifts to classify.
    pub shifts: Vec<ShiftRecord>,
    /// Evaluation instant; the server clock is used when absent.
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}

/// Request body for the `/shifts/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The shifts to aggregate.
    pub shifts: Vec<ShiftRecord>,
    /// Period key the hour totals cover (e.g. `2024-01`).
    pub period: PeriodPrefix,
    /// Evaluation instant; the server clock is used when absent.
    #[serde(default)]
    pub now: Option<NaiveDateTime>,
}

/// Request body for the `/shifts/assign` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignRequest {
    /// The catalog template to assign.
    pub template: ShiftKind,
    /// Record ID; generated when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// Assigned staff member ID.
    pub doctor_id: String,
    /// Assigned staff member display name.
    pub doctor_name: String,
    /// Staff member role.
    #[serde(default)]
    pub doctor_role: Option<String>,
    /// Staff member specialty.
    #[serde(default)]
    pub doctor_specialty: Option<String>,
    /// The day the shift starts.
    pub start_date: NaiveDate,
    /// Ward or service.
    #[serde(default)]
    pub area: Option<String>,
    /// Free-text notes.
    #[serde(default)]
    pub observations: Option<String>,
}

impl From<AssignRequest> for ShiftAssignment {
    fn from(req: AssignRequest) -> Self {
        ShiftAssignment {
            id: req.id,
            doctor_id: req.doctor_id,
            doctor_name: req.doctor_name,
            doctor_role: req.doctor_role,
            doctor_specialty: req.doctor_specialty,
            start_date: req.start_date,
            area: req.area,
            observations: req.observations,
        }
    }
}
