//! Shift template catalog entries.
//!
//! Templates are the predefined shift patterns staff pick from when
//! assigning a shift. They are loaded from configuration, never created by
//! users.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

use super::ClockTime;

/// The key of a shift template.
///
/// # Example
///
/// ```
/// use shift_engine::models::ShiftKind;
///
/// let kind: ShiftKind = "12h-night".parse().unwrap();
/// assert_eq!(kind, ShiftKind::TwelveHourNight);
/// assert_eq!(kind.to_string(), "12h-night");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftKind {
    /// Morning shift.
    #[serde(rename = "day")]
    Day,
    /// Afternoon shift.
    #[serde(rename = "evening")]
    Evening,
    /// Overnight shift.
    #[serde(rename = "night")]
    Night,
    /// Twelve-hour daytime shift.
    #[serde(rename = "12h-day")]
    TwelveHourDay,
    /// Twelve-hour overnight shift.
    #[serde(rename = "12h-night")]
    TwelveHourNight,
    /// Full-cycle on-call shift.
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl ShiftKind {
    /// Every template key, in catalog order.
    pub const ALL: [ShiftKind; 6] = [
        ShiftKind::Day,
        ShiftKind::Evening,
        ShiftKind::Night,
        ShiftKind::TwelveHourDay,
        ShiftKind::TwelveHourNight,
        ShiftKind::TwentyFourHour,
    ];

    /// The wire key for this template.
    pub fn key(&self) -> &'static str {
        match self {
            ShiftKind::Day => "day",
            ShiftKind::Evening => "evening",
            ShiftKind::Night => "night",
            ShiftKind::TwelveHourDay => "12h-day",
            ShiftKind::TwelveHourNight => "12h-night",
            ShiftKind::TwentyFourHour => "24h",
        }
    }
}

impl fmt::Display for ShiftKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ShiftKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShiftKind::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| EngineError::UnknownShiftTemplate { key: s.to_string() })
    }
}

/// A predefined shift pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    /// The template key.
    pub key: ShiftKind,
    /// Human-readable label shown in the assignment form.
    #[serde(default)]
    pub label: String,
    /// Wall-clock start time.
    pub start_time: ClockTime,
    /// Wall-clock end time (earlier than or equal to start when spanning midnight).
    pub end_time: ClockTime,
    /// Nominal length in hours.
    pub duration_hours: Decimal,
    /// Whether the template is classified as a night shift.
    pub is_night: bool,
    /// Pay surcharge percentage (0 if none).
    #[serde(default)]
    pub night_surcharge_percent: Decimal,
    /// Whether the shift ends on the calendar day after it starts.
    pub spans_midnight: bool,
}
