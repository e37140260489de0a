//! Wall-clock time of day.
//!
//! [`ClockTime`] is the canonical 24-hour representation used by every
//! arithmetic function in the engine. Parsing applies the `HH:mm` grammar up
//! front, so a constructed value is always in range.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Minutes in a calendar day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A time of day with hour in `0..=23` and minute in `0..=59`.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::ClockTime;
///
/// let time: ClockTime = "07:30".parse().unwrap();
/// assert_eq!(time.hour(), 7);
/// assert_eq!(time.minute(), 30);
/// assert_eq!(time.minutes_since_midnight(), 450);
/// assert_eq!(time.to_string(), "07:30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

/// AM/PM marker used by the 12-hour form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Meridiem {
    /// Midnight up to noon.
    Am,
    /// Noon up to midnight.
    Pm,
}

impl ClockTime {
    /// 00:00, the start of a calendar day.
    pub const MIDNIGHT: ClockTime = ClockTime { hour: 0, minute: 0 };

    /// 23:59, the last representable minute of a calendar day.
    pub const END_OF_DAY: ClockTime = ClockTime {
        hour: 23,
        minute: 59,
    };

    /// Creates a clock time, rejecting out-of-range components.
    pub fn new(hour: u32, minute: u32) -> EngineResult<Self> {
        if hour > 23 {
            return Err(EngineError::InvalidTimeComponent {
                field: "hour",
                value: hour,
            });
        }
        if minute > 59 {
            return Err(EngineError::InvalidTimeComponent {
                field: "minute",
                value: minute,
            });
        }
        Ok(Self { hour, minute })
    }

    /// Builds a clock time from minutes since midnight, wrapping past 24 hours.
    pub fn from_minutes(minutes: u32) -> Self {
        let minutes = minutes % MINUTES_PER_DAY;
        Self {
            hour: minutes / 60,
            minute: minutes % 60,
        }
    }

    /// Converts a 12-hour `(hour, minute, period)` triple to canonical form.
    ///
    /// `hour` must be in `1..=12`. 12 AM is midnight and 12 PM is noon.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_engine::models::{ClockTime, Meridiem};
    ///
    /// assert_eq!(ClockTime::from_12_hour(12, 0, Meridiem::Am).unwrap().to_string(), "00:00");
    /// assert_eq!(ClockTime::from_12_hour(12, 15, Meridiem::Pm).unwrap().to_string(), "12:15");
    /// assert_eq!(ClockTime::from_12_hour(6, 45, Meridiem::Pm).unwrap().to_string(), "18:45");
    /// ```
    pub fn from_12_hour(hour: u32, minute: u32, period: Meridiem) -> EngineResult<Self> {
        if !(1..=12).contains(&hour) {
            return Err(EngineError::InvalidTimeComponent {
                field: "hour",
                value: hour,
            });
        }
        let hour = match (period, hour) {
            (Meridiem::Am, 12) => 0,
            (Meridiem::Am, h) => h,
            (Meridiem::Pm, 12) => 12,
            (Meridiem::Pm, h) => h + 12,
        };
        Self::new(hour, minute)
    }

    /// Returns the 12-hour `(hour, minute, period)` triple for this time.
    pub fn to_12_hour(&self) -> (u32, u32, Meridiem) {
        let period = if self.hour < 12 {
            Meridiem::Am
        } else {
            Meridiem::Pm
        };
        let hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        (hour, self.minute, period)
    }

    /// The hour component (0-23).
    pub fn hour(&self) -> u32 {
        self.hour
    }

    /// The minute component (0-59).
    pub fn minute(&self) -> u32 {
        self.minute
    }

    /// Minutes elapsed since midnight (0-1439).
    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }
}

/// Checks the 24-hour grammar `^([01]?[0-9]|2[0-3]):[0-5][0-9]$`.
///
/// The hour may be written with one or two digits; the minute always has two.
pub(crate) fn parse_hh_mm(value: &str) -> Option<(u32, u32)> {
    let (hour_part, minute_part) = value.split_once(':')?;

    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(hour_part) || hour_part.len() > 2 {
        return None;
    }
    if !all_digits(minute_part) || minute_part.len() != 2 {
        return None;
    }

    let hour: u32 = hour_part.parse().ok()?;
    let minute: u32 = minute_part.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

impl FromStr for ClockTime {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hh_mm(s)
            .map(|(hour, minute)| Self { hour, minute })
            .ok_or_else(|| EngineError::InvalidTimeFormat {
                value: s.to_string(),
            })
    }
}

impl TryFrom<String> for ClockTime {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_two_digit_hour() {
        let time: ClockTime = "22:05".parse().unwrap();
        assert_eq!(time.hour(), 22);
        assert_eq!(time.minute(), 5);
    }

    #[test]
    fn test_parse_single_digit_hour() {
        let time: ClockTime = "7:30".parse().unwrap();
        assert_eq!(time.minutes_since_midnight(), 450);
        assert_eq!(time.to_string(), "07:30");
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        for bad in ["24:00", "12:60", "29:10", "99:99"] {
            assert!(bad.parse::<ClockTime>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "7", "7:3", "07:300", "007:30", "ab:cd", "07-30", " 07:30", "+7:30"] {
            assert!(bad.parse::<ClockTime>().is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_new_rejects_components() {
        assert!(matches!(
            ClockTime::new(24, 0),
            Err(EngineError::InvalidTimeComponent { field: "hour", value: 24 })
        ));
        assert!(matches!(
            ClockTime::new(8, 60),
            Err(EngineError::InvalidTimeComponent { field: "minute", value: 60 })
        ));
    }

    #[test]
    fn test_from_minutes_wraps() {
        assert_eq!(ClockTime::from_minutes(0), ClockTime::MIDNIGHT);
        assert_eq!(ClockTime::from_minutes(1439), ClockTime::END_OF_DAY);
        assert_eq!(ClockTime::from_minutes(1440 + 90).to_string(), "01:30");
    }

    #[test]
    fn test_12_hour_round_trip() {
        for minutes in (0..MINUTES_PER_DAY).step_by(15) {
            let time = ClockTime::from_minutes(minutes);
            let (hour, minute, period) = time.to_12_hour();
            assert_eq!(ClockTime::from_12_hour(hour, minute, period).unwrap(), time);
        }
    }

    #[test]
    fn test_12_hour_rejects_zero_hour() {
        assert!(ClockTime::from_12_hour(0, 0, Meridiem::Am).is_err());
        assert!(ClockTime::from_12_hour(13, 0, Meridiem::Pm).is_err());
    }

    #[test]
    fn test_to_12_hour_noon_and_midnight() {
        assert_eq!(ClockTime::MIDNIGHT.to_12_hour(), (12, 0, Meridiem::Am));
        assert_eq!(
            ClockTime::new(12, 0).unwrap().to_12_hour(),
            (12, 0, Meridiem::Pm)
        );
    }

    #[test]
    fn test_serializes_as_string() {
        let time = ClockTime::new(6, 0).unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"06:00\"");
        let back: ClockTime = serde_json::from_str("\"6:00\"").unwrap();
        assert_eq!(back, time);
        assert!(serde_json::from_str::<ClockTime>("\"25:00\"").is_err());
    }
}
