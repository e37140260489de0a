//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the timesheet
//! policy from YAML.

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::TimesheetPolicy;

/// File name of the policy inside a configuration directory.
const POLICY_FILE: &str = "policy.yaml";

/// Loads and provides access to the timesheet policy.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── policy.yaml   # Daily hour cap and validation switches
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config").unwrap();
/// println!("Daily cap: {}", loader.policy().max_daily_hours);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    policy: TimesheetPolicy,
}

impl ConfigLoader {
    /// Loads `policy.yaml` from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The policy file is missing
    /// - The file contains invalid YAML or wrongly typed fields
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let policy_path = path.as_ref().join(POLICY_FILE);
        let path_str = policy_path.display().to_string();

        let content = fs::read_to_string(&policy_path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let loader = Self::parse(&content, &path_str)?;
        info!(
            path = %path_str,
            max_daily_hours = %loader.policy.max_daily_hours,
            require_quarter_hours = loader.policy.require_quarter_hours,
            validate_breaks = loader.policy.validate_breaks,
            "Loaded timesheet policy"
        );
        Ok(loader)
    }

    /// Parses a policy from an in-memory YAML document.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_engine::config::ConfigLoader;
    /// use rust_decimal::Decimal;
    ///
    /// let loader = ConfigLoader::from_yaml_str("max_daily_hours: 12").unwrap();
    /// assert_eq!(loader.policy().max_daily_hours, Decimal::from(12));
    /// assert!(loader.policy().require_quarter_hours);
    /// ```
    pub fn from_yaml_str(yaml: &str) -> EngineResult<Self> {
        Self::parse(yaml, "<inline>")
    }

    fn parse(content: &str, path: &str) -> EngineResult<Self> {
        // An empty document deserializes as null rather than an empty map
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let policy: TimesheetPolicy =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        if policy.max_daily_hours <= Decimal::ZERO {
            return Err(EngineError::ConfigParseError {
                path: path.to_string(),
                message: "max_daily_hours must be positive".to_string(),
            });
        }

        Ok(Self { policy })
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &TimesheetPolicy {
        &self.policy
    }
}
