use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Tolerance separating the normal and degenerate solve cases, and the
/// slack allowed on the degenerate reach circle.
pub const DEFAULT_EPSILON: f64 = 1e-4;

// ---------------------------------------------------------------------------
// Serde default functions
// ---------------------------------------------------------------------------

const fn default_length() -> f64 {
    150.0
}
const fn default_angle() -> f64 {
    150.0
}
const fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

// ---------------------------------------------------------------------------
// ArmConfig
// ---------------------------------------------------------------------------

/// Two-bone arm configuration: bone lengths, initial pose and solver tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmConfig {
    /// Upper (root) bone length.
    #[serde(default = "default_length")]
    pub upper_length: f64,

    /// Lower (child) bone length.
    #[serde(default = "default_length")]
    pub lower_length: f64,

    /// Initial upper bone angle in degrees.
    #[serde(default = "default_angle")]
    pub upper_angle: f64,

    /// Initial lower bone angle in degrees, relative to the upper bone.
    #[serde(default = "default_angle")]
    pub lower_angle: f64,

    /// Solver tolerance (default: 1e-4).
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            upper_length: default_length(),
            lower_length: default_length(),
            upper_angle: default_angle(),
            lower_angle: default_angle(),
            epsilon: default_epsilon(),
        }
    }
}

impl ArmConfig {
    /// Validate configuration.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field: a negative or non-finite length, a
    /// non-finite angle, or an epsilon that is not strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("upper_length", self.upper_length),
            ("lower_length", self.lower_length),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidLength { field, value });
            }
        }
        for (field, value) in [
            ("upper_angle", self.upper_angle),
            ("lower_angle", self.lower_angle),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::InvalidAngle { field, value });
            }
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }

    /// Combined reach of both bones.
    #[must_use]
    pub fn arm_length(&self) -> f64 {
        self.upper_length + self.lower_length
    }

    /// Parse and validate from a TOML string.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Toml`] on malformed input, otherwise any error from
    /// [`validate`](Self::validate).
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
