//! Shift record model.
//!
//! This module defines [`ShiftRecord`], one row per shift assigned to a
//! staff member, as read from the record store.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::calculation::compute_duration_hours;

use super::{ClockTime, ShiftKind};

/// A shift assigned to a doctor or nurse.
///
/// The record carries the declared window only. Its temporal status is
/// derived on every read from the current instant; a `status` column sent
/// by the store is ignored on deserialization and never serialized back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Unique identifier for the shift.
    pub id: String,
    /// Identifier of the assigned staff member.
    pub doctor_id: String,
    /// Display name of the assigned staff member.
    pub doctor_name: String,
    /// Role of the staff member (doctor, nurse, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_role: Option<String>,
    /// Specialty of the staff member.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_specialty: Option<String>,
    /// Calendar date the shift starts on.
    pub start_date: NaiveDate,
    /// Calendar date the shift ends on (next day when spanning midnight).
    pub end_date: NaiveDate,
    /// Wall-clock start time.
    pub start_time: ClockTime,
    /// Wall-clock end time.
    pub end_time: ClockTime,
    /// The template this shift was assigned from.
    #[serde(rename = "type")]
    pub shift_type: ShiftKind,
    /// Stored nominal length, when the row carries one. Must lie in `(0, 24]`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_duration_hours"
    )]
    pub duration_hours: Option<Decimal>,
    /// Whether this is a night shift.
    #[serde(default)]
    pub is_night: bool,
    /// Pay surcharge percentage (0 if none), within `0..=100`.
    #[serde(default, deserialize_with = "deserialize_surcharge_percent")]
    pub night_surcharge_percent: Decimal,
    /// Whether the shift crosses into the next calendar day.
    #[serde(default)]
    pub spans_midnight: bool,
    /// Ward or service the shift covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    /// Free-text notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
}

impl ShiftRecord {
    /// Returns the shift length in hours.
    ///
    /// The stored `duration_hours` wins when present; otherwise it is
    /// derived from the clock times.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_engine::models::{ShiftKind, ShiftRecord};
    /// use chrono::NaiveDate;
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
    /// assert_eq!(shift.hours(), Decimal::from(12));
    /// ```
    pub fn hours(&self) -> Decimal {
        self.duration_hours
            .unwrap_or_else(|| compute_duration_hours(self.start_time, self.end_time))
    }

    /// The ISO `YYYY-MM-DD` form of the start date, used for period matching.
    pub fn start_date_key(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }
}

const MAX_SHIFT_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

fn deserialize_duration_hours<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let hours = Option::<Decimal>::deserialize(deserializer)?;
    match hours {
        Some(h) if h <= Decimal::ZERO || h > MAX_SHIFT_HOURS => Err(serde::de::Error::custom(
            format!("duration_hours {} is outside (0, 24]", h),
        )),
        _ => Ok(hours),
    }
}

fn deserialize_surcharge_percent<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let percent = <Decimal as serde::Deserialize>::deserialize(deserializer)?;
    if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
        return Err(serde::de::Error::custom(format!(
            "night_surcharge_percent {} is outside 0-100",
            percent
        )));
    }
    Ok(percent)
}
