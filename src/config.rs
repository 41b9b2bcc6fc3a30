//! Calculator defaults
//!
//! Replaces positional defaults with one explicit, serializable structure.
//! Every field has a documented default, so a partial JSON document only
//! needs to name the values it overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::composite::SAFE_WITHDRAWAL_RATE;

/// Errors loading a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Defaults applied by [`crate::Calculator`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// Compounding periods per year for the basic formulas (default 1, annual)
    pub compounding: u32,

    /// Compounding periods per year for contribution-based formulas (default 12)
    pub contribution_compounding: u32,

    /// Payments per year for loans (default 12)
    pub payments_per_year: u32,

    /// Expected annual inflation for retirement projections (default 2%)
    pub inflation_rate: f64,

    /// Annual withdrawal share of the retirement balance (default 4%)
    pub safe_withdrawal_rate: f64,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            compounding: 1,
            contribution_compounding: 12,
            payments_per_year: 12,
            inflation_rate: 0.02,
            safe_withdrawal_rate: SAFE_WITHDRAWAL_RATE,
        }
    }
}

impl CalcConfig {
    /// Parse a config from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Reject period counts no formula could use
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.compounding == 0 || self.contribution_compounding == 0 {
            return Err(ConfigError::Invalid("compounding periods must be positive"));
        }
        if self.payments_per_year == 0 {
            return Err(ConfigError::Invalid("payments per year must be positive"));
        }
        Ok(())
    }

    /// Set the basic-formula compounding frequency
    pub fn with_compounding(mut self, compounding: u32) -> Self {
        self.compounding = compounding;
        self
    }

    /// Set the inflation rate
    pub fn with_inflation(mut self, inflation_rate: f64) -> Self {
        self.inflation_rate = inflation_rate;
        self
    }
}
