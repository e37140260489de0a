//! Clock-time arithmetic.
//!
//! Conversions between `HH:mm` strings, minutes since midnight and decimal
//! hours, plus the single quarter-hour rounding policy used for every
//! reported duration. A clock-out at or before the clock-in is read as the
//! shift running past midnight.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::EngineResult;
use crate::models::{BreakPeriod, ClockTime, MINUTES_PER_DAY, ValidationResult, parse_hh_mm};

const INVALID_TIME_FORMAT: &str = "Invalid time format. Use HH:MM (24-hour format)";

/// Checks that a string is a 24-hour `HH:mm` time.
///
/// Accepts a one- or two-digit hour from 0 to 23 and a two-digit minute.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::validate_time_format;
///
/// assert!(validate_time_format("07:30").is_valid());
/// assert!(validate_time_format("7:30").is_valid());
/// assert!(!validate_time_format("24:00").is_valid());
/// ```
pub fn validate_time_format(time: &str) -> ValidationResult {
    match parse_hh_mm(time) {
        Some(_) => ValidationResult::Valid,
        None => ValidationResult::invalid(INVALID_TIME_FORMAT),
    }
}

/// Parses an `HH:mm` string into minutes since midnight.
///
/// Malformed input is rejected with
/// [`EngineError::InvalidTimeFormat`](crate::error::EngineError::InvalidTimeFormat).
pub fn parse_time_to_minutes(time: &str) -> EngineResult<u32> {
    Ok(time.parse::<ClockTime>()?.minutes_since_midnight())
}

/// Renders minutes since midnight as a zero-padded `HH:mm` string.
///
/// Values of a full day or more wrap around.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::minutes_to_time_string;
///
/// assert_eq!(minutes_to_time_string(0), "00:00");
/// assert_eq!(minutes_to_time_string(545), "09:05");
/// assert_eq!(minutes_to_time_string(1439), "23:59");
/// ```
pub fn minutes_to_time_string(minutes: u32) -> String {
    ClockTime::from_minutes(minutes).to_string()
}

/// Rounds decimal hours to the nearest quarter hour, halves rounding away from zero.
///
/// Apply once to a final duration, never to its parts.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::round_to_quarter;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let hours = Decimal::from_str("7.9").unwrap();
/// assert_eq!(round_to_quarter(hours), Decimal::from_str("8.0").unwrap());
///
/// // 7.125 sits exactly between 7.0 and 7.25
/// let hours = Decimal::from_str("7.125").unwrap();
/// assert_eq!(round_to_quarter(hours), Decimal::from_str("7.25").unwrap());
/// ```
pub fn round_to_quarter(hours: Decimal) -> Decimal {
    let quarters = (hours * Decimal::from(4))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    (quarters / Decimal::from(4)).normalize()
}

/// Converts whole minutes to unrounded decimal hours.
pub(crate) fn minutes_to_hours(minutes: i64) -> Decimal {
    Decimal::from(minutes) / Decimal::from(60)
}

/// Returns true when the shift runs past midnight.
///
/// Equal times count as crossing: the shift is a full 24 hours, not zero.
pub fn crosses_midnight(time_in: ClockTime, time_out: ClockTime) -> bool {
    time_out.minutes_since_midnight() <= time_in.minutes_since_midnight()
}

/// Elapsed minutes from `time_in` to `time_out`, without break deduction.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::calculate_duration;
///
/// assert_eq!(calculate_duration("08:00".parse().unwrap(), "16:30".parse().unwrap()), 510);
/// assert_eq!(calculate_duration("22:00".parse().unwrap(), "06:00".parse().unwrap()), 480);
/// assert_eq!(calculate_duration("09:00".parse().unwrap(), "09:00".parse().unwrap()), 1440);
/// ```
pub fn calculate_duration(time_in: ClockTime, time_out: ClockTime) -> u32 {
    let start = time_in.minutes_since_midnight();
    let mut end = time_out.minutes_since_midnight();
    if crosses_midnight(time_in, time_out) {
        end += MINUTES_PER_DAY;
    }
    end - start
}

/// Total minutes across all breaks, each measured with the midnight rule.
pub fn calculate_total_break_time(breaks: &[BreakPeriod]) -> u32 {
    breaks
        .iter()
        .map(|b| calculate_duration(b.start_time, b.end_time))
        .sum()
}

/// Worked hours for a shift, rounded to the quarter hour.
///
/// Break minutes are deducted before rounding and the result never goes
/// below zero.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::calculate_hours_from_time_in_out;
/// use rust_decimal::Decimal;
///
/// let time_in = "07:00".parse().unwrap();
/// let time_out = "15:30".parse().unwrap();
/// assert_eq!(calculate_hours_from_time_in_out(time_in, time_out, 30), Decimal::from(8));
/// ```
pub fn calculate_hours_from_time_in_out(
    time_in: ClockTime,
    time_out: ClockTime,
    break_minutes: u32,
) -> Decimal {
    let worked = i64::from(calculate_duration(time_in, time_out)) - i64::from(break_minutes);
    round_to_quarter(minutes_to_hours(worked.max(0)))
}

/// Renders a duration as `"{h}h {m}m"`, dropping a zero part.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::format_duration;
///
/// assert_eq!(format_duration(0), "0m");
/// assert_eq!(format_duration(60), "1h");
/// assert_eq!(format_duration(90), "1h 30m");
/// assert_eq!(format_duration(45), "45m");
/// ```
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    match (hours, mins) {
        (0, m) => format!("{}m", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}m", h, m),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn test_validate_time_format_accepts_grammar() {
        for ok in ["0:00", "00:00", "9:59", "19:45", "23:59"] {
            assert!(validate_time_format(ok).is_valid(), "{ok} should pass");
        }
    }

    #[test]
    fn test_validate_time_format_message() {
        let result = validate_time_format("12:5");
        assert_eq!(
            result.error(),
            Some("Invalid time format. Use HH:MM (24-hour format)")
        );
    }

    #[test]
    fn test_parse_time_to_minutes() {
        assert_eq!(parse_time_to_minutes("00:00").unwrap(), 0);
        assert_eq!(parse_time_to_minutes("13:15").unwrap(), 795);
        assert_eq!(parse_time_to_minutes("23:59").unwrap(), 1439);
        assert!(parse_time_to_minutes("noon").is_err());
    }

    #[test]
    fn test_minutes_to_time_string_wraps() {
        assert_eq!(minutes_to_time_string(1440), "00:00");
    }

    #[test]
    fn test_round_to_quarter_nearest() {
        assert_eq!(round_to_quarter(dec("1.1")), dec("1.0"));
        assert_eq!(round_to_quarter(dec("1.13")), dec("1.25"));
        assert_eq!(round_to_quarter(dec("1.37")), dec("1.25"));
        assert_eq!(round_to_quarter(dec("1.38")), dec("1.5"));
        assert_eq!(round_to_quarter(dec("1.875")), dec("2.0"));
        assert_eq!(round_to_quarter(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_round_to_quarter_119_minutes() {
        assert_eq!(round_to_quarter(minutes_to_hours(119)), dec("2"));
    }

    #[test]
    fn test_crosses_midnight() {
        assert!(!crosses_midnight(t("08:00"), t("17:00")));
        assert!(crosses_midnight(t("22:00"), t("06:00")));
        assert!(crosses_midnight(t("08:00"), t("08:00")));
        assert!(!crosses_midnight(t("00:00"), t("00:01")));
    }

    #[test]
    fn test_hours_same_day() {
        assert_eq!(calculate_hours_from_time_in_out(t("08:00"), t("16:00"), 0), dec("8"));
        assert_eq!(calculate_hours_from_time_in_out(t("08:00"), t("16:20"), 0), dec("8.25"));
        assert_eq!(calculate_hours_from_time_in_out(t("08:00"), t("16:07"), 0), dec("8"));
    }

    #[test]
    fn test_hours_cross_midnight() {
        assert_eq!(calculate_hours_from_time_in_out(t("22:00"), t("06:00"), 0), dec("8"));
        assert_eq!(calculate_hours_from_time_in_out(t("22:00"), t("06:00"), 45), dec("7.25"));
    }

    #[test]
    fn test_hours_equal_times_is_full_day() {
        assert_eq!(calculate_hours_from_time_in_out(t("06:00"), t("06:00"), 0), dec("24"));
    }

    #[test]
    fn test_hours_never_negative() {
        assert_eq!(
            calculate_hours_from_time_in_out(t("08:00"), t("09:00"), 120),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_total_break_time() {
        let breaks = vec![
            BreakPeriod::new(t("10:00"), t("10:15")),
            BreakPeriod::new(t("12:00"), t("12:30")),
            BreakPeriod::new(t("23:50"), t("00:10")),
        ];
        assert_eq!(calculate_total_break_time(&breaks), 65);
        assert_eq!(calculate_total_break_time(&[]), 0);
    }

    #[test]
    fn test_format_duration_long() {
        assert_eq!(format_duration(120), "2h");
        assert_eq!(format_duration(605), "10h 5m");
    }
}
