//! Sunday–Saturday payroll week calculations.
//!
//! Weeks always start on Sunday and end on Saturday; the Saturday is the
//! week-ending date used to key weekly submissions. Functions that depend on
//! "now" take `today` as an argument.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::WeekBoundaries;

/// The Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
}

/// Week-of-year for Sunday-start weeks.
///
/// Week 1 is the week containing 1 January, so the last days of December
/// can belong to week 1 of the following year.
fn week_number(date: NaiveDate) -> u32 {
    let start = week_start(date);
    let end = start + Duration::days(6);
    if end.year() > date.year() {
        return 1;
    }
    let jan_first = date - Duration::days(i64::from(date.ordinal0()));
    let first_week_start = week_start(jan_first);
    ((start - first_week_start).num_days() / 7 + 1) as u32
}

/// Computes the payroll week containing `date`.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::get_week_boundaries;
/// use chrono::NaiveDate;
///
/// // 2026-01-15 is a Thursday
/// let week = get_week_boundaries(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap());
/// assert_eq!(week.start, NaiveDate::from_ymd_opt(2026, 1, 11).unwrap());
/// assert_eq!(week.end, NaiveDate::from_ymd_opt(2026, 1, 17).unwrap());
/// assert_eq!(week.week_ending_date, week.end);
/// assert_eq!(week.week_number, 3);
/// ```
pub fn get_week_boundaries(date: NaiveDate) -> WeekBoundaries {
    let start = week_start(date);
    let end = start + Duration::days(6);
    WeekBoundaries {
        start,
        end,
        week_ending_date: end,
        week_number: week_number(date),
    }
}

/// Whether `date` falls in the same week as `today`.
pub fn is_in_current_week(date: NaiveDate, today: NaiveDate) -> bool {
    get_week_boundaries(today).contains(date)
}

/// Whether `date` falls in the week before `today`'s week.
pub fn is_in_last_week(date: NaiveDate, today: NaiveDate) -> bool {
    get_week_boundaries(today - Duration::days(7)).contains(date)
}

/// The seven dates, Sunday through Saturday, of the week containing `week_ending_date`.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::get_week_dates;
/// use chrono::{Datelike, NaiveDate, Weekday};
///
/// let dates = get_week_dates(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap());
/// assert_eq!(dates[0].weekday(), Weekday::Sun);
/// assert_eq!(dates[6], NaiveDate::from_ymd_opt(2026, 1, 17).unwrap());
/// ```
pub fn get_week_dates(week_ending_date: NaiveDate) -> [NaiveDate; 7] {
    let start = week_start(week_ending_date);
    std::array::from_fn(|offset| start + Duration::days(offset as i64))
}

/// Renders the week containing `week_ending_date` as `MM/dd/yyyy - MM/dd/yyyy`.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::format_week_range;
/// use chrono::NaiveDate;
///
/// let range = format_week_range(NaiveDate::from_ymd_opt(2026, 1, 17).unwrap());
/// assert_eq!(range, "01/11/2026 - 01/17/2026");
/// ```
pub fn format_week_range(week_ending_date: NaiveDate) -> String {
    let week = get_week_boundaries(week_ending_date);
    format!(
        "{} - {}",
        week.start.format("%m/%d/%Y"),
        week.end.format("%m/%d/%Y")
    )
}

/// The Saturday ending `today`'s week.
pub fn get_current_week_ending_date(today: NaiveDate) -> NaiveDate {
    get_week_boundaries(today).week_ending_date
}

/// The Saturday ending the week before `today`'s week.
pub fn get_previous_week_ending_date(today: NaiveDate) -> NaiveDate {
    get_week_boundaries(today - Duration::days(7)).week_ending_date
}
