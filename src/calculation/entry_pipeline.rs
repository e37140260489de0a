//! End-to-end processing of a submitted time entry.
//!
//! Runs the checks in the order the entry form needs them:
//!
//! 1. Date/status eligibility
//! 2. Break placement (if the policy asks for it)
//! 3. Midnight splitting into per-day records
//! 4. Per-day hour cap
//! 5. Quarter-hour check on the entered times (if the policy asks for it)
//!
//! The first failing gate is reported in [`ProcessedEntry::outcome`]. Split
//! records are only produced once the entry has passed steps 1 and 2.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::TimesheetPolicy;
use crate::error::EngineResult;
use crate::models::{EntryStatus, SplitShift, TimeEntry, ValidationResult};

use super::business_dates::{can_create_entry_for_date, can_modify_entry};
use super::clock::Clock;
use super::daily_hours::{validate_daily_hours_with_limit, validate_quarter_hours};
use super::shift_splitter::{split_cross_midnight_shift, validate_breaks_within_shift};
use super::time_arithmetic::{calculate_duration, calculate_total_break_time, minutes_to_hours};

/// The result of processing one time entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessedEntry {
    /// One record per calendar day touched; empty if a gate failed before splitting.
    pub shifts: Vec<SplitShift>,
    /// Sum of `hours` across `shifts`.
    pub total_hours: Decimal,
    /// `Valid`, or the first failure encountered.
    pub outcome: ValidationResult,
}

impl ProcessedEntry {
    fn rejected(outcome: ValidationResult) -> Self {
        Self {
            shifts: Vec::new(),
            total_hours: Decimal::ZERO,
            outcome,
        }
    }

    /// Whether the entry may be handed on for storage.
    pub fn is_accepted(&self) -> bool {
        self.outcome.is_valid()
    }
}

/// Processes an entry against the policy as of `today`.
///
/// `status` is `None` for a new entry (creation rules) and the stored status
/// for an existing one (modification rules).
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::process_time_entry;
/// use timesheet_engine::config::TimesheetPolicy;
/// use timesheet_engine::models::TimeEntry;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let entry = TimeEntry::parse("2026-01-14", "22:00", "06:00", &[("02:00", "02:30")]).unwrap();
///
/// let processed = process_time_entry(&entry, None, &TimesheetPolicy::default(), today);
/// assert!(processed.is_accepted());
/// assert_eq!(processed.shifts.len(), 2);
/// assert_eq!(processed.total_hours, Decimal::new(75, 1));
/// ```
pub fn process_time_entry(
    entry: &TimeEntry,
    status: Option<EntryStatus>,
    policy: &TimesheetPolicy,
    today: NaiveDate,
) -> ProcessedEntry {
    let eligibility = match status {
        Some(status) => can_modify_entry(entry.date, status, today),
        None => can_create_entry_for_date(entry.date, today),
    };
    if let Some(reason) = eligibility.reason() {
        warn!(date = %entry.date, reason = %reason, "Time entry rejected by date policy");
        return ProcessedEntry::rejected(ValidationResult::invalid(reason.to_string()));
    }

    if policy.validate_breaks {
        let breaks = validate_breaks_within_shift(entry.time_in, entry.time_out, &entry.breaks);
        if let Some(error) = breaks.error() {
            warn!(date = %entry.date, error = %error, "Time entry rejected by break check");
            return ProcessedEntry::rejected(breaks);
        }
    }

    let shifts = split_cross_midnight_shift(entry.date, entry.time_in, entry.time_out, &entry.breaks);
    let total_hours: Decimal = shifts.iter().map(|s| s.hours).sum();

    let mut outcome = ValidationResult::Valid;
    for shift in &shifts {
        outcome = outcome.and_then(|| {
            validate_daily_hours_with_limit(shift.hours, Decimal::ZERO, policy.max_daily_hours)
        });
    }
    if policy.require_quarter_hours {
        // Split records are already rounded, so check the minutes as entered
        outcome = outcome
            .and_then(|| validate_quarter_hours(minutes_to_hours(worked_minutes(entry))));
    }

    match outcome.error() {
        Some(error) => warn!(date = %entry.date, error = %error, "Time entry failed hour policy"),
        None => debug!(
            date = %entry.date,
            records = shifts.len(),
            total_hours = %total_hours,
            "Time entry accepted"
        ),
    }

    ProcessedEntry {
        shifts,
        total_hours,
        outcome,
    }
}

/// Minutes between clock-in and clock-out less every break, before rounding.
fn worked_minutes(entry: &TimeEntry) -> i64 {
    let span = i64::from(calculate_duration(entry.time_in, entry.time_out));
    (span - i64::from(calculate_total_break_time(&entry.breaks))).max(0)
}

/// Processes entries with a fixed policy and an injected clock.
///
/// The clock is read once per call.
#[derive(Debug, Clone)]
pub struct EntryProcessor<C: Clock> {
    policy: TimesheetPolicy,
    clock: C,
}

impl<C: Clock> EntryProcessor<C> {
    /// Creates a processor.
    pub fn new(policy: TimesheetPolicy, clock: C) -> Self {
        Self { policy, clock }
    }

    /// Returns the policy in use.
    pub fn policy(&self) -> &TimesheetPolicy {
        &self.policy
    }

    /// Processes a typed entry.
    pub fn process(&self, entry: &TimeEntry, status: Option<EntryStatus>) -> ProcessedEntry {
        process_time_entry(entry, status, &self.policy, self.clock.today())
    }

    /// Processes the raw strings submitted by the entry form.
    ///
    /// Malformed dates, times or status names are returned as errors before
    /// any policy check runs.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_engine::calculation::{EntryProcessor, FixedClock};
    /// use timesheet_engine::config::TimesheetPolicy;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    /// let processor = EntryProcessor::new(TimesheetPolicy::default(), FixedClock(today));
    ///
    /// let processed = processor
    ///     .process_raw("2026-01-15", "07:00", "15:30", &[("11:30", "12:00")], Some("Draft"))
    ///     .unwrap();
    /// assert!(processed.is_accepted());
    ///
    /// assert!(processor.process_raw("2026-01-15", "7am", "15:30", &[], None).is_err());
    /// ```
    pub fn process_raw(
        &self,
        date: &str,
        time_in: &str,
        time_out: &str,
        breaks: &[(&str, &str)],
        status: Option<&str>,
    ) -> EngineResult<ProcessedEntry> {
        let entry = TimeEntry::parse(date, time_in, time_out, breaks)?;
        let status = status.map(str::parse::<EntryStatus>).transpose()?;
        Ok(self.process(&entry, status))
    }
}
