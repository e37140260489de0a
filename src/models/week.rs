//! Payroll week model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A Sunday–Saturday payroll week.
///
/// `start` is always a Sunday and `end` the following Saturday. The
/// week-ending date used as the submission key is the same Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekBoundaries {
    /// The Sunday opening the week.
    pub start: NaiveDate,
    /// The Saturday closing the week.
    pub end: NaiveDate,
    /// The week-ending date (equal to `end`).
    pub week_ending_date: NaiveDate,
    /// Week-of-year number, counting Sunday-start weeks from the one containing 1 January.
    pub week_number: u32,
}

impl WeekBoundaries {
    /// Checks if a date falls within the week (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

/// An inclusive range of selectable dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// Earliest selectable date.
    pub min: NaiveDate,
    /// Latest selectable date.
    pub max: NaiveDate,
}

impl DateRange {
    /// Checks if a date falls within the range (inclusive on both ends).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.min && date <= self.max
    }
}
