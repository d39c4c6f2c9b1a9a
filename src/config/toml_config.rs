use crate::utils::error::{Result, SplitError};
use crate::utils::validation::{validate_bounds, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CABLE_MIN_LENGTH: u32 = 2;
pub const CABLE_MAX_LENGTH: u32 = 1024;
pub const TIMES_MIN: u32 = 1;
pub const TIMES_MAX: u32 = 1024;

/// What to do when a cable has fewer length units than requested sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortCablePolicy {
    /// Fail with `InvalidOperation`.
    #[default]
    Reject,
    /// Cut the cable into unit-length pieces instead.
    Clamp,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    pub cable_min_length: u32,
    pub cable_max_length: u32,
    pub times_min: u32,
    pub times_max: u32,
    pub short_cable_policy: ShortCablePolicy,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            cable_min_length: CABLE_MIN_LENGTH,
            cable_max_length: CABLE_MAX_LENGTH,
            times_min: TIMES_MIN,
            times_max: TIMES_MAX,
            short_cable_policy: ShortCablePolicy::Reject,
        }
    }
}

impl SplitterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SplitterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for SplitterConfig {
    fn validate(&self) -> Result<()> {
        validate_bounds("cable_length", self.cable_min_length, self.cable_max_length)?;
        validate_bounds("times", self.times_min, self.times_max)?;

        // A one-unit cable can never be cut into positive-length pieces.
        if self.cable_min_length < CABLE_MIN_LENGTH {
            return Err(SplitError::ConfigError {
                message: format!("cable_min_length must be at least {}", CABLE_MIN_LENGTH),
            });
        }
        if self.times_min < TIMES_MIN {
            return Err(SplitError::ConfigError {
                message: format!("times_min must be at least {}", TIMES_MIN),
            });
        }
        Ok(())
    }
}
