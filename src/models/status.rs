//! Temporal status of a shift.

use serde::{Deserialize, Serialize};

/// Where a shift sits relative to the current instant.
///
/// Always derived from the shift window and "now"; never read from storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    /// The shift has not started yet.
    Upcoming,
    /// The current instant is inside the shift window (bounds inclusive).
    Active,
    /// The shift window has ended.
    Finished,
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftStatus::Upcoming => write!(f, "upcoming"),
            ShiftStatus::Active => write!(f, "active"),
            ShiftStatus::Finished => write!(f, "finished"),
        }
    }
}
