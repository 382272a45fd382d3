//! Core data models for the shift engine.
//!
//! This module contains the domain models used throughout the engine.

mod clock_time;
mod shift;
mod shift_template;
mod status;

pub use clock_time::ClockTime;
pub use shift::ShiftRecord;
pub use shift_template::{ShiftKind, ShiftTemplate};
pub use status::ShiftStatus;
