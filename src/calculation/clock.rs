//! Injectable time source.
//!
//! Status depends on "now", so the engine never reads the system clock
//! itself. Callers read a [`Clock`] once per evaluation and pass the instant
//! down.

use chrono::{Local, NaiveDateTime};

/// A source of the current wall-clock instant.
pub trait Clock: Send + Sync {
    /// Returns the current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the host's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
///
/// # Example
///
/// ```
/// use shift_engine::calculation::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let instant = NaiveDate::from_ymd_opt(2024, 1, 10)
///     .unwrap()
///     .and_hms_opt(23, 0, 0)
///     .unwrap();
/// let clock = FixedClock::new(instant);
/// assert_eq!(clock.now(), instant);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: NaiveDateTime,
}

impl FixedClock {
    /// Creates a clock frozen at `instant`.
    pub fn new(instant: NaiveDateTime) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.instant
    }
}
