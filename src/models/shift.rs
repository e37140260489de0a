//! Shift-related value types.
//!
//! This module defines the [`BreakPeriod`], [`SplitShift`] and [`TimeEntry`]
//! types, plus the [`EntryStatus`] lifecycle marker the surrounding
//! application attaches to stored entries.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::clock_time::ClockTime;

/// A break taken during a shift.
///
/// A break whose end is at or before its start is treated as crossing
/// midnight, the same rule applied to shifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakPeriod {
    /// When the break started.
    pub start_time: ClockTime,
    /// When the break ended.
    pub end_time: ClockTime,
}

impl BreakPeriod {
    /// Creates a break from its two clock times.
    pub fn new(start_time: ClockTime, end_time: ClockTime) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Parses a break from two `HH:mm` strings.
    pub fn parse(start_time: &str, end_time: &str) -> EngineResult<Self> {
        Ok(Self::new(start_time.parse()?, end_time.parse()?))
    }
}

impl fmt::Display for BreakPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start_time, self.end_time)
    }
}

/// One calendar day's portion of a reported shift.
///
/// A shift that stays within one day produces a single `SplitShift`; a shift
/// crossing midnight produces two.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{ClockTime, SplitShift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let split = SplitShift {
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     time_in: "07:00".parse().unwrap(),
///     time_out: "15:30".parse().unwrap(),
///     break_minutes: 30,
///     hours: Decimal::new(80, 1),
/// };
/// assert_eq!(split.time_out, ClockTime::new(15, 30).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitShift {
    /// The calendar day this portion belongs to.
    pub date: NaiveDate,
    /// Start of the portion.
    pub time_in: ClockTime,
    /// End of the portion (23:59 for the first half of a split shift).
    pub time_out: ClockTime,
    /// Break minutes allocated to this portion.
    pub break_minutes: u32,
    /// Worked hours, rounded to the quarter hour.
    pub hours: Decimal,
}

/// A shift as reported on the timesheet form.
///
/// Identity and persistence belong to the caller; this is only the data the
/// calculations need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// The calendar day the shift started on.
    pub date: NaiveDate,
    /// Clock-in time.
    pub time_in: ClockTime,
    /// Clock-out time, possibly on the following day.
    pub time_out: ClockTime,
    /// Breaks taken during the shift.
    #[serde(default)]
    pub breaks: Vec<BreakPeriod>,
}

impl TimeEntry {
    /// Builds an entry from the raw strings a form submits.
    ///
    /// `date` is `yyyy-MM-dd`; times are `HH:mm`; each break is a
    /// `(start, end)` pair of `HH:mm` strings.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_engine::models::TimeEntry;
    ///
    /// let entry = TimeEntry::parse("2026-01-15", "06:30", "15:00", &[("11:00", "11:30")]).unwrap();
    /// assert_eq!(entry.breaks.len(), 1);
    ///
    /// assert!(TimeEntry::parse("2026-01-15", "6.30", "15:00", &[]).is_err());
    /// assert!(TimeEntry::parse("15/01/2026", "06:30", "15:00", &[]).is_err());
    /// ```
    pub fn parse(
        date: &str,
        time_in: &str,
        time_out: &str,
        breaks: &[(&str, &str)],
    ) -> EngineResult<Self> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
            EngineError::InvalidEntry {
                message: format!("invalid date '{}': {}", date, e),
            }
        })?;
        let breaks = breaks
            .iter()
            .map(|(start, end)| BreakPeriod::parse(start, end))
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Self {
            date,
            time_in: time_in.parse()?,
            time_out: time_out.parse()?,
            breaks,
        })
    }
}

/// Lifecycle status of a stored entry.
///
/// The engine only reads this; transitions are owned by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryStatus {
    /// Being edited, not yet submitted.
    Draft,
    /// Submitted and awaiting approval.
    Submitted,
    /// Approved by a manager; permanently locked.
    Approved,
    /// Sent back to the employee.
    Rejected,
}

impl EntryStatus {
    /// Whether the status alone prevents any further edits.
    pub fn is_locked(&self) -> bool {
        matches!(self, EntryStatus::Approved)
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryStatus::Draft => write!(f, "Draft"),
            EntryStatus::Submitted => write!(f, "Submitted"),
            EntryStatus::Approved => write!(f, "Approved"),
            EntryStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

impl FromStr for EntryStatus {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Draft" => Ok(EntryStatus::Draft),
            "Submitted" => Ok(EntryStatus::Submitted),
            "Approved" => Ok(EntryStatus::Approved),
            "Rejected" => Ok(EntryStatus::Rejected),
            other => Err(EngineError::UnknownStatus {
                value: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_break_display() {
        let brk = BreakPeriod::parse("12:00", "12:30").unwrap();
        assert_eq!(brk.to_string(), "12:00-12:30");
    }

    #[test]
    fn test_break_parse_rejects_bad_time() {
        assert!(matches!(
            BreakPeriod::parse("12:00", "12:3"),
            Err(EngineError::InvalidTimeFormat { .. })
        ));
    }

    #[test]
    fn test_time_entry_parse() {
        let entry = TimeEntry::parse("2026-01-15", "22:00", "06:00", &[("02:00", "02:30")]).unwrap();
        assert_eq!(entry.date, make_date("2026-01-15"));
        assert_eq!(entry.time_in.to_string(), "22:00");
        assert_eq!(entry.time_out.to_string(), "06:00");
        assert_eq!(entry.breaks[0].start_time.to_string(), "02:00");
    }

    #[test]
    fn test_time_entry_parse_rejects_bad_date() {
        let err = TimeEntry::parse("2026-02-30", "08:00", "16:00", &[]).unwrap_err();
        assert!(matches!(err, EngineError::InvalidEntry { .. }));
    }

    #[test]
    fn test_time_entry_deserialization() {
        let json = r#"{
            "date": "2026-01-15",
            "time_in": "07:00",
            "time_out": "15:30",
            "breaks": [
                { "start_time": "11:30", "end_time": "12:00" }
            ]
        }"#;

        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.breaks.len(), 1);
        assert_eq!(entry.time_out, ClockTime::new(15, 30).unwrap());
    }

    #[test]
    fn test_time_entry_breaks_default_to_empty() {
        let json = r#"{ "date": "2026-01-15", "time_in": "07:00", "time_out": "15:30" }"#;
        let entry: TimeEntry = serde_json::from_str(json).unwrap();
        assert!(entry.breaks.is_empty());
    }

    #[test]
    fn test_entry_status_parse_and_display() {
        for status in [
            EntryStatus::Draft,
            EntryStatus::Submitted,
            EntryStatus::Approved,
            EntryStatus::Rejected,
        ] {
            assert_eq!(status.to_string().parse::<EntryStatus>().unwrap(), status);
        }
        assert!("approved".parse::<EntryStatus>().is_err());
    }

    #[test]
    fn test_only_approved_is_locked() {
        assert!(EntryStatus::Approved.is_locked());
        assert!(!EntryStatus::Draft.is_locked());
        assert!(!EntryStatus::Submitted.is_locked());
        assert!(!EntryStatus::Rejected.is_locked());
    }

    #[test]
    fn test_entry_status_serialization() {
        assert_eq!(
            serde_json::to_string(&EntryStatus::Approved).unwrap(),
            "\"Approved\""
        );
    }
}
