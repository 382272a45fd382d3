//! Night surcharge calculation.
//!
//! The surcharge percentage is applied flat over the whole shift, including
//! the daytime portion of a 24-hour shift. Payroll has not asked for a split
//! by night window, so the catalog percentage is taken at face value.

use rust_decimal::Decimal;

use crate::models::ShiftRecord;

/// Returns the surcharge expressed in equivalent hours.
///
/// Zero for shifts not flagged as night shifts, whatever percentage they carry.
pub fn night_surcharge_hours(shift: &ShiftRecord) -> Decimal {
    if !shift.is_night {
        return Decimal::ZERO;
    }
    shift.hours() * surcharge_factor(shift.night_surcharge_percent)
}

/// Converts a percentage into a multiplier on hours.
///
/// ```
/// use shift_engine::calculation::surcharge_factor;
/// use rust_decimal::Decimal;
///
/// assert_eq!(surcharge_factor(Decimal::from(35)), Decimal::new(35, 2));
/// ```
pub fn surcharge_factor(percent: Decimal) -> Decimal {
    percent / Decimal::from(100)
}
