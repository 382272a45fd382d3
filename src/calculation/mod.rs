//! Calculation logic for the shift engine.
//!
//! This module contains the shift duration computation, window resolution
//! and status classification, the injectable clock, period attribution and
//! hour totals, night surcharge, listing/reporting aggregates, and building
//! shift records from catalog templates.

mod assignment;
mod clock;
mod duration;
mod period;
mod reporting;
mod status;
mod surcharge;

pub use assignment::{ShiftAssignment, assign_shift};
pub use clock::{Clock, FixedClock, SystemClock};
pub use duration::{MINUTES_PER_DAY, compute_duration_hours};
pub use period::{
    PeriodPrefix, night_hours_in_period, surcharge_hours_in_period, total_hours_in_period,
};
pub use reporting::{
    DoctorHours, ShiftStatusReport, ShiftSummary, StatusCounts, classify_shifts,
    find_active_shift, find_next_shift, hours_by_doctor, summarize_shifts,
};
pub use status::{ShiftWindow, compute_shift_status, resolve_window};
pub use surcharge::{night_surcharge_hours, surcharge_factor};
