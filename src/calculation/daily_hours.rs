//! Daily hours policy checks.
//!
//! A day may carry at most [`DEFAULT_MAX_DAILY_HOURS`] of standard plus
//! overtime hours, and reported hours must be whole quarter hours.

use rust_decimal::Decimal;

use crate::models::ValidationResult;

/// Maximum standard plus overtime hours on one calendar day.
pub const DEFAULT_MAX_DAILY_HOURS: Decimal = Decimal::from_parts(16, 0, 0, false, 0);

const QUARTER_HOUR_MESSAGE: &str = "Hours must be in quarter-hour increments (0.25, 0.5, 0.75)";

/// Checks standard plus overtime hours against the 16-hour daily cap.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::validate_daily_hours;
/// use rust_decimal::Decimal;
///
/// assert!(validate_daily_hours(Decimal::from(8), Decimal::ZERO).is_valid());
///
/// let result = validate_daily_hours(Decimal::from(10), Decimal::from(7));
/// assert_eq!(
///     result.error(),
///     Some("Total hours (17) exceeds maximum 16 hours per day")
/// );
/// ```
pub fn validate_daily_hours(standard_hours: Decimal, overtime_hours: Decimal) -> ValidationResult {
    validate_daily_hours_with_limit(standard_hours, overtime_hours, DEFAULT_MAX_DAILY_HOURS)
}

/// Checks standard plus overtime hours against an explicit daily cap.
///
/// Exactly reaching the cap is allowed.
pub fn validate_daily_hours_with_limit(
    standard_hours: Decimal,
    overtime_hours: Decimal,
    max_hours: Decimal,
) -> ValidationResult {
    let total = standard_hours + overtime_hours;
    if total > max_hours {
        return ValidationResult::invalid(format!(
            "Total hours ({}) exceeds maximum {} hours per day",
            total.normalize(),
            max_hours.normalize()
        ));
    }
    ValidationResult::Valid
}

/// Checks that hours are a whole number of quarter hours.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::validate_quarter_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert!(validate_quarter_hours(Decimal::from_str("7.75").unwrap()).is_valid());
/// assert!(!validate_quarter_hours(Decimal::from_str("7.8").unwrap()).is_valid());
/// ```
pub fn validate_quarter_hours(hours: Decimal) -> ValidationResult {
    if (hours * Decimal::from(4)).fract().is_zero() {
        ValidationResult::Valid
    } else {
        ValidationResult::invalid(QUARTER_HOUR_MESSAGE)
    }
}
