//! Cross-midnight shift splitting.
//!
//! A shift that runs past midnight is reported as two [`SplitShift`]s, one
//! per calendar day, so that per-day totals and payroll exports land on the
//! right dates. Break minutes are shared between the two days in proportion
//! to the time worked on each side of midnight.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{BreakPeriod, ClockTime, MINUTES_PER_DAY, SplitShift, ValidationResult};

use super::time_arithmetic::{
    calculate_duration, calculate_hours_from_time_in_out, calculate_total_break_time,
    minutes_to_hours, round_to_quarter,
};

/// Splits a shift into one record per calendar day it touches.
///
/// A same-day shift yields one record carrying every break minute. A shift
/// whose clock-out is at or before its clock-in yields two:
///
/// - `date_in`, from `time_in` to `23:59`
/// - the next day, from `00:00` to `time_out`
///
/// Day one receives `round(first_day_minutes / total_minutes * break_minutes)`
/// break minutes and day two the remainder, so the two always sum to the
/// input total. Each day's hours are rounded to the quarter hour on their own.
///
/// The first record closes at `23:59`, so recomputing its span from the
/// stored clock times gives one minute less than the hours credited to it.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::split_cross_midnight_shift;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let shifts = split_cross_midnight_shift(
///     date,
///     "22:00".parse().unwrap(),
///     "06:00".parse().unwrap(),
///     &[],
/// );
///
/// assert_eq!(shifts.len(), 2);
/// assert_eq!(shifts[0].time_out.to_string(), "23:59");
/// assert_eq!(shifts[0].hours, Decimal::from(2));
/// assert_eq!(shifts[1].date, NaiveDate::from_ymd_opt(2026, 1, 16).unwrap());
/// assert_eq!(shifts[1].hours, Decimal::from(6));
/// ```
pub fn split_cross_midnight_shift(
    date_in: NaiveDate,
    time_in: ClockTime,
    time_out: ClockTime,
    breaks: &[BreakPeriod],
) -> Vec<SplitShift> {
    let start_minutes = time_in.minutes_since_midnight();
    let end_minutes = time_out.minutes_since_midnight();
    let total_break_minutes = calculate_total_break_time(breaks);

    if end_minutes > start_minutes {
        return vec![SplitShift {
            date: date_in,
            time_in,
            time_out,
            break_minutes: total_break_minutes,
            hours: calculate_hours_from_time_in_out(time_in, time_out, total_break_minutes),
        }];
    }

    let first_day_minutes = MINUTES_PER_DAY - start_minutes;
    let second_day_minutes = end_minutes;
    let total_minutes = first_day_minutes + second_day_minutes;

    let first_day_breaks = proportional_share(first_day_minutes, total_minutes, total_break_minutes);
    let second_day_breaks = total_break_minutes - first_day_breaks;

    let next_day = date_in + Duration::days(1);

    debug!(
        date = %date_in,
        time_in = %time_in,
        time_out = %time_out,
        first_day_minutes,
        second_day_minutes,
        first_day_breaks,
        second_day_breaks,
        "Splitting shift at midnight"
    );

    vec![
        SplitShift {
            date: date_in,
            time_in,
            time_out: ClockTime::END_OF_DAY,
            break_minutes: first_day_breaks,
            hours: day_hours(first_day_minutes, first_day_breaks),
        },
        SplitShift {
            date: next_day,
            time_in: ClockTime::MIDNIGHT,
            time_out,
            break_minutes: second_day_breaks,
            hours: day_hours(second_day_minutes, second_day_breaks),
        },
    ]
}

/// `round(part / whole * amount)` in integer arithmetic, halves rounding up.
fn proportional_share(part: u32, whole: u32, amount: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    let numerator = 2 * u64::from(part) * u64::from(amount) + u64::from(whole);
    let share = numerator / (2 * u64::from(whole));
    // part <= whole, so the share never exceeds amount
    share as u32
}

fn day_hours(day_minutes: u32, day_break_minutes: u32) -> Decimal {
    let worked = i64::from(day_minutes) - i64::from(day_break_minutes);
    round_to_quarter(minutes_to_hours(worked.max(0)))
}

/// Checks that every break lies inside the shift and that no two overlap.
///
/// Positions are measured from `time_in` along the shift, so breaks after
/// midnight on an overnight shift are handled naturally. This check is
/// separate from the arithmetic, which accepts any breaks as given.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::validate_breaks_within_shift;
/// use timesheet_engine::models::BreakPeriod;
///
/// let time_in = "22:00".parse().unwrap();
/// let time_out = "06:00".parse().unwrap();
///
/// let inside = [BreakPeriod::parse("02:00", "02:30").unwrap()];
/// assert!(validate_breaks_within_shift(time_in, time_out, &inside).is_valid());
///
/// let outside = [BreakPeriod::parse("07:00", "07:30").unwrap()];
/// assert!(!validate_breaks_within_shift(time_in, time_out, &outside).is_valid());
/// ```
pub fn validate_breaks_within_shift(
    time_in: ClockTime,
    time_out: ClockTime,
    breaks: &[BreakPeriod],
) -> ValidationResult {
    let shift_minutes = calculate_duration(time_in, time_out);
    let start = time_in.minutes_since_midnight();

    let mut placed: Vec<(u32, u32, &BreakPeriod)> = Vec::with_capacity(breaks.len());
    for brk in breaks {
        let offset = (brk.start_time.minutes_since_midnight() + MINUTES_PER_DAY - start)
            % MINUTES_PER_DAY;
        let length = calculate_duration(brk.start_time, brk.end_time);
        if offset + length > shift_minutes {
            return ValidationResult::invalid(format!("Break {} falls outside the shift", brk));
        }
        placed.push((offset, offset + length, brk));
    }

    placed.sort_by_key(|(offset, _, _)| *offset);
    for pair in placed.windows(2) {
        let (_, earlier_end, earlier) = pair[0];
        let (later_start, _, later) = pair[1];
        if earlier_end > later_start {
            return ValidationResult::invalid(format!("Breaks {} and {} overlap", earlier, later));
        }
    }

    ValidationResult::Valid
}

/// Sums split-shift hours per calendar day, ordered by date.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{daily_totals, split_cross_midnight_shift};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let thursday = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let friday = NaiveDate::from_ymd_opt(2026, 1, 16).unwrap();
///
/// let mut shifts = split_cross_midnight_shift(thursday, "22:00".parse().unwrap(), "02:00".parse().unwrap(), &[]);
/// shifts.extend(split_cross_midnight_shift(friday, "10:00".parse().unwrap(), "14:00".parse().unwrap(), &[]));
///
/// let totals = daily_totals(&shifts);
/// assert_eq!(totals[&thursday], Decimal::from(2));
/// assert_eq!(totals[&friday], Decimal::from(6));
/// ```
pub fn daily_totals(shifts: &[SplitShift]) -> BTreeMap<NaiveDate, Decimal> {
    let mut totals = BTreeMap::new();
    for shift in shifts {
        *totals.entry(shift.date).or_insert(Decimal::ZERO) += shift.hours;
    }
    totals
}
