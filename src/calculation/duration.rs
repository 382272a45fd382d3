//! Shift duration from wall-clock times.

use rust_decimal::Decimal;

use crate::models::ClockTime;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// Computes the length of a shift in hours from its start and end clock times.
///
/// An end time earlier than the start time crosses midnight, so a full day
/// is added to the end before subtracting. Equal times denote a 24-hour
/// shift, never an empty one. No rounding is applied.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::compute_duration_hours;
/// use rust_decimal::Decimal;
///
/// let hours = compute_duration_hours("19:00".parse().unwrap(), "07:00".parse().unwrap());
/// assert_eq!(hours, Decimal::from(12));
///
/// let hours = compute_duration_hours("07:00".parse().unwrap(), "07:00".parse().unwrap());
/// assert_eq!(hours, Decimal::from(24));
/// ```
pub fn compute_duration_hours(start_time: ClockTime, end_time: ClockTime) -> Decimal {
    let start = start_time.minutes_since_midnight();
    let mut end = end_time.minutes_since_midnight();

    if end <= start {
        end += MINUTES_PER_DAY;
    }

    Decimal::from(end - start) / Decimal::from(60)
}
