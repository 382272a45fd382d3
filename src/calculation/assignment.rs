//! Building shift records from catalog templates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftRecord, ShiftTemplate};

/// The staff-supplied part of a shift assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftAssignment {
    /// Record ID; a v4 UUID is generated when absent.
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

/// Creates the record for `assignment` using `template`'s times and flags.
///
/// `end_date` is the day after `start_date` when the template spans
/// midnight, and `start_date` otherwise.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::{ShiftAssignment, assign_shift};
/// use shift_engine::models::{ShiftKind, ShiftTemplate};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let template = ShiftTemplate {
///     key: ShiftKind::TwelveHourNight,
///     label: "Noche 12h".to_string(),
///     start_time: "19:00".parse().unwrap(),
///     end_time: "07:00".parse().unwrap(),
///     duration_hours: Decimal::from(12),
///     is_night: true,
///     night_surcharge_percent: Decimal::from(35),
///     spans_midnight: true,
/// };
/// let assignment = ShiftAssignment {
///     id: Some("turno_100".to_string()),
///     doctor_id: "doc_3".to_string(),
///     doctor_name: "Dra. Pérez".to_string(),
///     doctor_role: None,
///     doctor_specialty: None,
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
///     area: None,
///     observations: None,
/// };
///
/// let shift = assign_shift(&template, assignment).unwrap();
/// assert_eq!(shift.end_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// ```
pub fn assign_shift(
    template: &ShiftTemplate,
    assignment: ShiftAssignment,
) -> EngineResult<ShiftRecord> {
    let id = assignment
        .id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let end_date = if template.spans_midnight {
        assignment
            .start_date
            .succ_opt()
            .ok_or_else(|| EngineError::InvalidShiftWindow {
                shift_id: id.clone(),
                message: format!("no calendar day after {}", assignment.start_date),
            })?
    } else {
        assignment.start_date
    };

    debug!(
        shift_id = %id,
        template = %template.key,
        start_date = %assignment.start_date,
        end_date = %end_date,
        "Assigning shift from template"
    );

    Ok(ShiftRecord {
        id,
        doctor_id: assignment.doctor_id,
        doctor_name: assignment.doctor_name,
        doctor_role: assignment.doctor_role,
        doctor_specialty: assignment.doctor_specialty,
        start_date: assignment.start_date,
        end_date,
        start_time: template.start_time,
        end_time: template.end_time,
        shift_type: template.key,
        duration_hours: Some(template.duration_hours),
        is_night: template.is_night,
        night_surcharge_percent: template.night_surcharge_percent,
        spans_midnight: template.spans_midnight,
        area: assignment.area,
        observations: assignment.observations,
    })
}
