//! Calculation logic for the Timesheet Engine.
//!
//! This module contains the clock-time arithmetic and quarter-hour rounding,
//! cross-midnight shift splitting, daily hour policy checks, Sunday–Saturday
//! week boundaries, the current/last-week editing rules, and the pipeline
//! that runs a submitted entry through all of them.

mod business_dates;
mod clock;
mod daily_hours;
mod entry_pipeline;
mod shift_splitter;
mod time_arithmetic;
mod week_boundaries;

pub use business_dates::{
    can_create_entry_for_date, can_modify_entry, can_submit_week, get_oldest_modifiable_date,
    get_valid_date_range, validate_business_date,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use daily_hours::{
    DEFAULT_MAX_DAILY_HOURS, validate_daily_hours, validate_daily_hours_with_limit,
    validate_quarter_hours,
};
pub use entry_pipeline::{EntryProcessor, ProcessedEntry, process_time_entry};
pub use shift_splitter::{daily_totals, split_cross_midnight_shift, validate_breaks_within_shift};
pub use time_arithmetic::{
    calculate_duration, calculate_hours_from_time_in_out, calculate_total_break_time,
    crosses_midnight, format_duration, minutes_to_time_string, parse_time_to_minutes,
    round_to_quarter, validate_time_format,
};
pub use week_boundaries::{
    format_week_range, get_current_week_ending_date, get_previous_week_ending_date,
    get_week_boundaries, get_week_dates, is_in_current_week, is_in_last_week, week_start,
};
