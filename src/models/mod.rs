//! Core data models for the Timesheet Engine.
//!
//! All types here are plain values computed on demand; none are persisted or
//! mutated by the engine.

mod clock_time;
mod shift;
mod validation;
mod week;

pub(crate) use clock_time::parse_hh_mm;
pub use clock_time::{ClockTime, MINUTES_PER_DAY, Meridiem};
pub use shift::{BreakPeriod, EntryStatus, SplitShift, TimeEntry};
pub use validation::{DenialReason, Eligibility, ValidationResult};
pub use week::{DateRange, WeekBoundaries};
