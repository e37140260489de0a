//! Configuration types for timesheet validation.
//!
//! This module contains the strongly-typed policy structure deserialized
//! from `policy.yaml`.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::calculation::DEFAULT_MAX_DAILY_HOURS;

fn default_max_daily_hours() -> Decimal {
    DEFAULT_MAX_DAILY_HOURS
}

fn default_true() -> bool {
    true
}

/// Company-level rules applied when processing time entries.
///
/// Every field has a default, so an empty file yields the standard policy.
/// The Sunday–Saturday week and the current/last-week editing window are
/// fixed and cannot be configured here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimesheetPolicy {
    /// Maximum standard plus overtime hours on one calendar day.
    #[serde(default = "default_max_daily_hours")]
    pub max_daily_hours: Decimal,
    /// Whether the entered times must give whole quarter hours worked.
    ///
    /// When false, off-quarter entries are accepted and rounded.
    #[serde(default = "default_true")]
    pub require_quarter_hours: bool,
    /// Whether breaks must lie inside the shift without overlapping.
    #[serde(default = "default_true")]
    pub validate_breaks: bool,
}

impl Default for TimesheetPolicy {
    fn default() -> Self {
        Self {
            max_daily_hours: DEFAULT_MAX_DAILY_HOURS,
            require_quarter_hours: true,
            validate_breaks: true,
        }
    }
}
