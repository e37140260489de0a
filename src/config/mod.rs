//! Configuration loading for the Timesheet Engine.
//!
//! The company policy (daily hour cap and validation switches) is loaded
//! from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Daily cap: {}", config.policy().max_daily_hours);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::TimesheetPolicy;
