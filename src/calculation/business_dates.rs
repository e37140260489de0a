//! Business-date eligibility rules.
//!
//! Entries may only be created or changed for dates in the current or the
//! previous Sunday–Saturday week. Approved entries are locked whatever their
//! date. Each check is evaluated fresh against the `today` it is given.

use chrono::{Duration, NaiveDate};
use tracing::debug;

use crate::models::{DateRange, DenialReason, Eligibility, EntryStatus};

use super::week_boundaries::{is_in_current_week, is_in_last_week, week_start};

fn within_editable_weeks(date: NaiveDate, today: NaiveDate) -> Eligibility {
    if is_in_current_week(date, today) || is_in_last_week(date, today) {
        Eligibility::Allowed
    } else {
        deny(date, DenialReason::OlderThanLastWeek)
    }
}

fn deny(date: NaiveDate, reason: DenialReason) -> Eligibility {
    debug!(date = %date, reason = %reason, "Date eligibility denied");
    Eligibility::denied(reason)
}

/// Decides whether an existing entry may be edited.
///
/// Status is checked before date: an approved entry is locked even in the
/// current week.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::can_modify_entry;
/// use timesheet_engine::models::EntryStatus;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
///
/// assert!(can_modify_entry(today, EntryStatus::Draft, today).can_modify());
///
/// let locked = can_modify_entry(today, EntryStatus::Approved, today);
/// assert_eq!(locked.reason_message().as_deref(), Some("Cannot modify approved entries"));
/// ```
pub fn can_modify_entry(entry_date: NaiveDate, status: EntryStatus, today: NaiveDate) -> Eligibility {
    if status.is_locked() {
        return deny(entry_date, DenialReason::ApprovedEntry);
    }
    within_editable_weeks(entry_date, today)
}

/// Decides whether a new entry may be created for `date`.
pub fn can_create_entry_for_date(date: NaiveDate, today: NaiveDate) -> Eligibility {
    if date > today {
        return deny(date, DenialReason::FutureEntryDate);
    }
    within_editable_weeks(date, today)
}

/// Validates a date picked in the entry form.
///
/// Future dates get their own message; otherwise the creation rules apply.
pub fn validate_business_date(date: NaiveDate, today: NaiveDate) -> Eligibility {
    if date > today {
        return deny(date, DenialReason::FutureSelection);
    }
    can_create_entry_for_date(date, today)
}

/// Decides whether the week ending on `week_ending_date` may be submitted.
///
/// Only weeks ending after today are refused.
pub fn can_submit_week(week_ending_date: NaiveDate, today: NaiveDate) -> Eligibility {
    if week_ending_date > today {
        return deny(week_ending_date, DenialReason::FutureWeek);
    }
    Eligibility::Allowed
}

/// The Sunday that opens last week: the earliest date ever editable.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::get_oldest_modifiable_date;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// assert_eq!(get_oldest_modifiable_date(today), NaiveDate::from_ymd_opt(2026, 1, 4).unwrap());
/// ```
pub fn get_oldest_modifiable_date(today: NaiveDate) -> NaiveDate {
    week_start(today) - Duration::days(7)
}

/// The range a date picker should offer: last week's Sunday through today.
pub fn get_valid_date_range(today: NaiveDate) -> DateRange {
    DateRange {
        min: get_oldest_modifiable_date(today),
        max: today,
    }
}
