// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Simulation configuration
//!
//! Loaded from an optional TOML file. Every field has a default, so an empty
//! file (or no file) yields the stock workshop.

use crate::pacing::Activity;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Errors from loading or rendering a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("failed to render configuration: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Inclusive bounds for one kind of delay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DelayRange {
    #[serde(with = "humantime_serde")]
    pub min: Duration,
    #[serde(with = "humantime_serde")]
    pub max: Duration,
}

impl DelayRange {
    pub const fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    /// A range that always yields `delay`
    pub const fn fixed(delay: Duration) -> Self {
        Self::new(delay, delay)
    }

    const fn millis(min: u64, max: u64) -> Self {
        Self::new(Duration::from_millis(min), Duration::from_millis(max))
    }
}

/// Population and pacing of a workshop run.
///
/// The reindeer team is always nine strong and is not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Number of elves in the workshop
    pub elves: u32,
    /// Time a reindeer spends away between rounds
    pub vacation: DelayRange,
    /// Time a harnessed reindeer spends delivering
    pub delivery: DelayRange,
    /// Time an elf works before needing help
    pub toy_making: DelayRange,
    /// Time Santa spends with each elf of a group
    pub consultation: DelayRange,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            elves: 15,
            vacation: DelayRange::millis(1_000, 3_000),
            delivery: DelayRange::millis(500, 1_500),
            toy_making: DelayRange::millis(1_000, 4_000),
            consultation: DelayRange::millis(500, 1_200),
        }
    }
}

impl SimConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.elves == 0 {
            return Err(ConfigError::Invalid("elves must be at least 1".to_string()));
        }
        for activity in Activity::ALL {
            let range = self.range(activity);
            if range.min > range.max {
                return Err(ConfigError::Invalid(format!(
                    "{activity}: min {:?} exceeds max {:?}",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }

    /// Delay bounds for an activity
    pub fn range(&self, activity: Activity) -> DelayRange {
        match activity {
            Activity::Vacation => self.vacation,
            Activity::Delivery => self.delivery,
            Activity::ToyMaking => self.toy_making,
            Activity::Consultation => self.consultation,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
