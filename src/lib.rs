//! Timesheet Engine for construction-industry time reporting
//!
//! This crate provides the time-calculation and business-date validation layer
//! used when employees log hours: clock-time arithmetic, cross-midnight shift
//! splitting, quarter-hour rounding, Sunday–Saturday week boundaries, and the
//! "current week or last week only" modification policy.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
