//! Period attribution and hour totals.
//!
//! A shift belongs to a period when the ISO text of its `start_date` starts
//! with the period key. The end instant is never consulted: a night shift
//! starting on the last day of a month counts entirely toward that month.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::ShiftRecord;

use super::surcharge::night_surcharge_hours;

/// A reporting period key: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::PeriodPrefix;
///
/// let january = PeriodPrefix::month(2024, 1).unwrap();
/// assert_eq!(january.as_str(), "2024-01");
/// assert!(january.matches_date_key("2024-01-31"));
/// assert!(!january.matches_date_key("2024-02-01"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PeriodPrefix(String);

impl PeriodPrefix {
    /// The calendar-month key for `year`/`month`.
    pub fn month(year: i32, month: u32) -> EngineResult<Self> {
        format!("{:04}-{:02}", year, month).parse()
    }

    /// Returns the key text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether an ISO `YYYY-MM-DD` date string falls in this period.
    pub fn matches_date_key(&self, date_key: &str) -> bool {
        date_key.starts_with(&self.0)
    }

    /// Whether `shift` is attributed to this period.
    pub fn contains(&self, shift: &ShiftRecord) -> bool {
        self.matches_date_key(&shift.start_date_key())
    }
}

impl FromStr for PeriodPrefix {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || EngineError::InvalidPeriod {
            value: s.to_string(),
        };
        let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

        match s.len() {
            4 if digits(s) => {}
            7 => {
                let (year, month) = s.split_once('-').ok_or_else(invalid)?;
                if !digits(year) || !digits(month) || year.len() != 4 {
                    return Err(invalid());
                }
                let month: u32 = month.parse().map_err(|_| invalid())?;
                if !(1..=12).contains(&month) {
                    return Err(invalid());
                }
            }
            10 => {
                NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid())?;
            }
            _ => return Err(invalid()),
        }

        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for PeriodPrefix {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PeriodPrefix> for String {
    fn from(period: PeriodPrefix) -> Self {
        period.0
    }
}

impl fmt::Display for PeriodPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sums the hours of every shift attributed to `period`.
pub fn total_hours_in_period(shifts: &[ShiftRecord], period: &PeriodPrefix) -> Decimal {
    shifts
        .iter()
        .filter(|s| period.contains(s))
        .map(ShiftRecord::hours)
        .sum()
}

/// Sums the hours of night shifts attributed to `period`.
pub fn night_hours_in_period(shifts: &[ShiftRecord], period: &PeriodPrefix) -> Decimal {
    shifts
        .iter()
        .filter(|s| s.is_night && period.contains(s))
        .map(ShiftRecord::hours)
        .sum()
}

/// Sums the night surcharge, in equivalent hours, attributed to `period`.
pub fn surcharge_hours_in_period(shifts: &[ShiftRecord], period: &PeriodPrefix) -> Decimal {
    shifts
        .iter()
        .filter(|s| period.contains(s))
        .map(night_surcharge_hours)
        .sum()
}
