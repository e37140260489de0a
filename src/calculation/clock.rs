//! Source of "today" for date eligibility rules.
//!
//! Date functions take `today` as a plain argument. A [`Clock`] is sampled
//! once at the entry point and the date passed down, so tests can pin it.

use chrono::{Local, NaiveDate};

/// Provides the current calendar date.
pub trait Clock: Send + Sync {
    /// Today's date.
    fn today(&self) -> NaiveDate;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{Clock, FixedClock};
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(FixedClock(date).today(), date);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
