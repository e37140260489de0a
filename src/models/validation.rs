//! Outcome types for policy checks.
//!
//! Expected business-rule violations are values, not errors. Format and hour
//! policy checks return [`ValidationResult`]; date and status permission
//! checks return [`Eligibility`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a format or policy check.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::ValidationResult;
///
/// let ok = ValidationResult::Valid;
/// assert!(ok.is_valid());
/// assert_eq!(ok.error(), None);
///
/// let bad = ValidationResult::invalid("Hours must be positive");
/// assert!(!bad.is_valid());
/// assert_eq!(bad.error(), Some("Hours must be positive"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ValidationResult {
    /// The check passed.
    Valid,
    /// The check failed.
    Invalid {
        /// Human-readable explanation.
        error: String,
    },
}

impl ValidationResult {
    /// Creates a failed result with the given message.
    pub fn invalid(error: impl Into<String>) -> Self {
        ValidationResult::Invalid {
            error: error.into(),
        }
    }

    /// Returns true if the check passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Returns the failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid { error } => Some(error),
        }
    }

    /// Keeps the first failure: returns `self` if invalid, otherwise `next()`.
    pub fn and_then(self, next: impl FnOnce() -> ValidationResult) -> ValidationResult {
        match self {
            ValidationResult::Valid => next(),
            invalid => invalid,
        }
    }
}

/// Why a date or status check refused an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// The entry is already approved.
    ApprovedEntry,
    /// The date falls before the start of last week.
    OlderThanLastWeek,
    /// An entry was requested for a date after today.
    FutureEntryDate,
    /// A date picker selection was after today.
    FutureSelection,
    /// A week ending after today was submitted.
    FutureWeek,
}

impl fmt::Display for DenialReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            DenialReason::ApprovedEntry => "Cannot modify approved entries",
            DenialReason::OlderThanLastWeek => "Cannot modify entries older than last week",
            DenialReason::FutureEntryDate => "Cannot create entries for future dates",
            DenialReason::FutureSelection => "Cannot select future dates",
            DenialReason::FutureWeek => "Cannot submit timesheets for future weeks",
        };
        f.write_str(message)
    }
}

/// Outcome of a date/status permission check.
///
/// Modification, creation and submission rights always agree for a given
/// check, so one outcome answers all three questions.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{DenialReason, Eligibility};
///
/// let denied = Eligibility::denied(DenialReason::ApprovedEntry);
/// assert!(!denied.can_modify());
/// assert!(!denied.can_create());
/// assert_eq!(denied.reason_message().as_deref(), Some("Cannot modify approved entries"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Eligibility {
    /// The action is permitted.
    Allowed,
    /// The action is refused.
    Denied {
        /// Why it was refused.
        reason: DenialReason,
    },
}

impl Eligibility {
    /// Creates a refusal.
    pub fn denied(reason: DenialReason) -> Self {
        Eligibility::Denied { reason }
    }

    /// Whether an existing entry may be edited.
    pub fn can_modify(&self) -> bool {
        matches!(self, Eligibility::Allowed)
    }

    /// Whether a new entry may be created.
    pub fn can_create(&self) -> bool {
        matches!(self, Eligibility::Allowed)
    }

    /// Whether a week may be submitted.
    pub fn can_submit(&self) -> bool {
        matches!(self, Eligibility::Allowed)
    }

    /// The refusal reason, if any.
    pub fn reason(&self) -> Option<DenialReason> {
        match self {
            Eligibility::Allowed => None,
            Eligibility::Denied { reason } => Some(*reason),
        }
    }

    /// The refusal reason rendered for display.
    pub fn reason_message(&self) -> Option<String> {
        self.reason().map(|reason| reason.to_string())
    }
}
