//! Listing and reporting views over a set of shifts.
//!
//! Every function here takes the evaluation instant as a parameter so a
//! whole report is classified against a single "now". A shift whose window
//! cannot be resolved is reported or skipped on its own; it never fails the
//! rest of the batch.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{ShiftRecord, ShiftStatus};

use super::period::{
    PeriodPrefix, night_hours_in_period, surcharge_hours_in_period, total_hours_in_period,
};
use super::status::{ShiftWindow, resolve_window};

/// The status of one shift, or why it could not be classified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftStatusReport {
    /// The shift's ID.
    pub shift_id: String,
    /// The derived status; absent when the window is invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ShiftStatus>,
    /// The resolved window; absent when invalid.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub window: Option<ShiftWindow>,
    /// Shift length in hours.
    pub hours: Decimal,
    /// The window error, when there is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Number of shifts in each status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Shifts not yet started.
    pub upcoming: u32,
    /// Shifts in progress.
    pub active: u32,
    /// Shifts already over.
    pub finished: u32,
    /// Shifts whose window could not be resolved.
    pub invalid: u32,
}

/// Hours worked by one staff member within a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorHours {
    /// Staff member ID.
    pub doctor_id: String,
    /// Staff member display name, taken from their first shift.
    pub doctor_name: String,
    /// Number of shifts attributed to the period.
    pub shift_count: u32,
    /// Total hours.
    pub total_hours: Decimal,
    /// Hours on night shifts.
    pub night_hours: Decimal,
}

/// Aggregate view of a set of shifts for one period at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftSummary {
    /// The period the hour totals cover.
    pub period: PeriodPrefix,
    /// The instant statuses were evaluated at.
    pub evaluated_at: NaiveDateTime,
    /// Total hours in the period.
    pub total_hours: Decimal,
    /// Night hours in the period.
    pub night_hours: Decimal,
    /// Night surcharge in equivalent hours.
    pub surcharge_hours: Decimal,
    /// Status counts across all input shifts.
    pub status_counts: StatusCounts,
    /// ID of the shift in progress, if any.
    pub active_shift_id: Option<String>,
    /// ID of the next shift to start, if any.
    pub next_shift_id: Option<String>,
    /// Per staff member breakdown for the period.
    pub by_doctor: Vec<DoctorHours>,
}

fn status_or_skip(shift: &ShiftRecord, now: NaiveDateTime) -> Option<ShiftStatus> {
    match resolve_window(shift) {
        Ok(window) => Some(window.classify(now)),
        Err(err) => {
            warn!(shift_id = %shift.id, error = %err, "Skipping shift with invalid window");
            None
        }
    }
}

/// Classifies every shift, keeping input order.
pub fn classify_shifts(shifts: &[ShiftRecord], now: NaiveDateTime) -> Vec<ShiftStatusReport> {
    shifts
        .iter()
        .map(|shift| {
            let (status, window, error) = match resolve_window(shift) {
                Ok(window) => (Some(window.classify(now)), Some(window), None),
                Err(err) => (None, None, Some(err.to_string())),
            };
            ShiftStatusReport {
                shift_id: shift.id.clone(),
                status,
                window,
                hours: shift.hours(),
                error,
            }
        })
        .collect()
}

fn statuses_at(shifts: &[ShiftRecord], now: NaiveDateTime) -> Vec<Option<ShiftStatus>> {
    shifts.iter().map(|shift| status_or_skip(shift, now)).collect()
}

fn first_active<'a>(
    shifts: &'a [ShiftRecord],
    statuses: &[Option<ShiftStatus>],
) -> Option<&'a ShiftRecord> {
    shifts
        .iter()
        .zip(statuses)
        .find(|(_, status)| **status == Some(ShiftStatus::Active))
        .map(|(shift, _)| shift)
}

fn earliest_upcoming<'a>(
    shifts: &'a [ShiftRecord],
    statuses: &[Option<ShiftStatus>],
) -> Option<&'a ShiftRecord> {
    shifts
        .iter()
        .zip(statuses)
        .filter(|(_, status)| **status == Some(ShiftStatus::Upcoming))
        .map(|(shift, _)| shift)
        .min_by_key(|shift| shift.start_date)
}

/// Returns the first shift that is active at `now`.
pub fn find_active_shift(shifts: &[ShiftRecord], now: NaiveDateTime) -> Option<&ShiftRecord> {
    first_active(shifts, &statuses_at(shifts, now))
}

/// Returns the upcoming shift with the earliest start date.
///
/// Only the date is compared; among shifts starting the same day the one
/// listed first wins.
pub fn find_next_shift(shifts: &[ShiftRecord], now: NaiveDateTime) -> Option<&ShiftRecord> {
    earliest_upcoming(shifts, &statuses_at(shifts, now))
}

/// Groups the shifts attributed to `period` by staff member.
///
/// Members appear in order of their first shift in the input.
pub fn hours_by_doctor(shifts: &[ShiftRecord], period: &PeriodPrefix) -> Vec<DoctorHours> {
    let mut rows: Vec<DoctorHours> = Vec::new();

    for shift in shifts.iter().filter(|s| period.contains(s)) {
        let hours = shift.hours();
        let night = if shift.is_night { hours } else { Decimal::ZERO };

        match rows.iter_mut().find(|r| r.doctor_id == shift.doctor_id) {
            Some(row) => {
                row.shift_count += 1;
                row.total_hours += hours;
                row.night_hours += night;
            }
            None => rows.push(DoctorHours {
                doctor_id: shift.doctor_id.clone(),
                doctor_name: shift.doctor_name.clone(),
                shift_count: 1,
                total_hours: hours,
                night_hours: night,
            }),
        }
    }

    rows
}

/// Builds the full summary for `period` as seen at `now`.
pub fn summarize_shifts(
    shifts: &[ShiftRecord],
    period: &PeriodPrefix,
    now: NaiveDateTime,
) -> ShiftSummary {
    let statuses = statuses_at(shifts, now);

    let mut status_counts = StatusCounts::default();
    for status in &statuses {
        match status {
            Some(ShiftStatus::Upcoming) => status_counts.upcoming += 1,
            Some(ShiftStatus::Active) => status_counts.active += 1,
            Some(ShiftStatus::Finished) => status_counts.finished += 1,
            None => status_counts.invalid += 1,
        }
    }

    ShiftSummary {
        period: period.clone(),
        evaluated_at: now,
        total_hours: total_hours_in_period(shifts, period),
        night_hours: night_hours_in_period(shifts, period),
        surcharge_hours: surcharge_hours_in_period(shifts, period),
        status_counts,
        active_shift_id: first_active(shifts, &statuses).map(|s| s.id.clone()),
        next_shift_id: earliest_upcoming(shifts, &statuses).map(|s| s.id.clone()),
        by_doctor: hours_by_doctor(shifts, period),
    }
}
