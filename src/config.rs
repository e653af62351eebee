use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::ProfileError;
use crate::motion_constraints::MotionConstraints;
use crate::motion_profile::MotionProfile;
use crate::motion_state::MotionState;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),
}

/// A complete move description: limits plus both boundary states.
///
/// ```toml
/// [constraints]
/// v_max = 40.0
/// a_max = 16.0
/// d_max = 16.0
///
/// [start]
/// x = 0.0
///
/// [end]
/// x = 80.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub constraints: MotionConstraints,
    #[serde(default)]
    pub start: MotionState,
    pub end: MotionState,
}

impl ProfileConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Constructs the profile this config describes.
    pub fn build(&self) -> Result<MotionProfile, ConfigError> {
        Ok(MotionProfile::new(self.start, self.end, self.constraints)?)
    }
}
