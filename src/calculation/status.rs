//! Shift window resolution and status classification.
//!
//! This module places a shift's declared dates and clock times on the
//! calendar and classifies the resulting window against a caller-supplied
//! instant. Both steps are pure; the caller owns the clock.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{ShiftRecord, ShiftStatus};

/// The concrete start and end instants of a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// Start date at start time.
    pub start: NaiveDateTime,
    /// End instant, inclusive.
    pub end: NaiveDateTime,
}

impl ShiftWindow {
    /// Classifies `now` against the window. Both bounds are inclusive.
    pub fn classify(&self, now: NaiveDateTime) -> ShiftStatus {
        if now < self.start {
            ShiftStatus::Upcoming
        } else if now <= self.end {
            ShiftStatus::Active
        } else {
            ShiftStatus::Finished
        }
    }
}

/// Resolves the start and end instants of a shift.
///
/// The end clock time is anchored on `end_date` when the shift spans
/// midnight or its dates differ, and on `start_date` otherwise.
///
/// # Errors
///
/// Returns [`EngineError::InvalidShiftWindow`] when the resolved end does not
/// fall after the start, e.g. a shift flagged as spanning midnight whose
/// `end_date` was left equal to its `start_date`.
pub fn resolve_window(shift: &ShiftRecord) -> EngineResult<ShiftWindow> {
    let start = shift.start_date.and_time(shift.start_time.as_naive_time());

    let end_anchor = if shift.spans_midnight || shift.end_date != shift.start_date {
        shift.end_date
    } else {
        shift.start_date
    };
    let end = end_anchor.and_time(shift.end_time.as_naive_time());

    if end <= start {
        return Err(EngineError::InvalidShiftWindow {
            shift_id: shift.id.clone(),
            message: format!(
                "end {} does not fall after start {}",
                end.format("%Y-%m-%d %H:%M"),
                start.format("%Y-%m-%d %H:%M")
            ),
        });
    }

    Ok(ShiftWindow { start, end })
}

/// Computes whether a shift is upcoming, active or finished at `now`.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::compute_shift_status;
/// use shift_engine::models::{ShiftKind, ShiftRecord, ShiftStatus};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let shift = ShiftRecord {
///     id: "turno_001".to_string(),
///     doctor_id: "doc_1".to_string(),
///     doctor_name: "Dra. Ruiz".to_string(),
///     doctor_role: None,
///     doctor_specialty: None,
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 1, 11).unwrap(),
///     start_time: "19:00".parse().unwrap(),
///     end_time: "07:00".parse().unwrap(),
///     shift_type: ShiftKind::TwelveHourNight,
///     duration_hours: None,
///     is_night: true,
///     night_surcharge_percent: Decimal::from(35),
///     spans_midnight: true,
///     area: None,
///     observations: None,
/// };
///
/// let now = NaiveDateTime::parse_from_str("2024-01-10 23:00", "%Y-%m-%d %H:%M").unwrap();
/// assert_eq!(compute_shift_status(&shift, now).unwrap(), ShiftStatus::Active);
/// ```
pub fn compute_shift_status(shift: &ShiftRecord, now: NaiveDateTime) -> EngineResult<ShiftStatus> {
    Ok(resolve_window(shift)?.classify(now))
}
