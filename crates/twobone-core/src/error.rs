use thiserror::Error;

/// Top-level error type for twobone.
#[derive(Debug, Error)]
pub enum TwoBoneError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IK error: {0}")]
    Ik(#[from] IkError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid {field}: {value} (must be finite and >= 0)")]
    InvalidLength { field: &'static str, value: f64 },

    #[error("Invalid {field}: {value} (must be finite)")]
    InvalidAngle { field: &'static str, value: f64 },

    #[error("Invalid epsilon: {0} (must be finite and > 0)")]
    InvalidEpsilon(f64),

    #[error("Invalid arm: {0}")]
    Validation(#[from] ValidationError),
}

/// Solve failures.
///
/// The only way a solve can fail is a target outside the chain's reach.
/// This is an expected outcome, not a fault: the chain pose is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IkError {
    #[error("Target unreachable: distance {distance} outside reach [{min_reach}, {max_reach}]")]
    Unreachable {
        distance: f64,
        min_reach: f64,
        max_reach: f64,
    },
}

/// Input validation errors for bone construction and manual overrides.
///
/// Copy + static messages for cheap propagation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("Angle is not finite: {0}")]
    NonFiniteAngle(f64),

    #[error("Bone length must be finite and >= 0, got {0}")]
    InvalidLength(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twobone_error_from_config_error() {
        let err = ConfigError::InvalidEpsilon(-1.0);
        let top: TwoBoneError = err.into();
        assert!(matches!(top, TwoBoneError::Config(_)));
        assert!(top.to_string().contains("-1"));
    }

    #[test]
    fn twobone_error_from_ik_error() {
        let err = IkError::Unreachable {
            distance: 301.0,
            min_reach: 0.0,
            max_reach: 300.0,
        };
        let top: TwoBoneError = err.into();
        assert!(matches!(top, TwoBoneError::Ik(_)));
        assert!(top.to_string().contains("301"));
    }

    #[test]
    fn twobone_error_from_validation_error() {
        let top: TwoBoneError = ValidationError::NonFiniteAngle(f64::NAN).into();
        assert!(matches!(top, TwoBoneError::Validation(_)));
    }

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let config_err: ConfigError = io_err.into();
        assert!(matches!(config_err, ConfigError::Io(_)));
    }

    #[test]
    fn ik_error_is_copy() {
        let err = IkError::Unreachable {
            distance: 40.0,
            min_reach: 50.0,
            max_reach: 150.0,
        };
        let err2 = err;
        assert_eq!(err, err2);
    }

    #[test]
    fn display_messages() {
        assert_eq!(
            IkError::Unreachable {
                distance: 40.0,
                min_reach: 50.0,
                max_reach: 150.0
            }
            .to_string(),
            "Target unreachable: distance 40 outside reach [50, 150]"
        );
        assert_eq!(
            ValidationError::InvalidLength(-2.0).to_string(),
            "Bone length must be finite and >= 0, got -2"
        );
        assert_eq!(
            ConfigError::InvalidLength {
                field: "upper_length",
                value: -1.5
            }
            .to_string(),
            "Invalid upper_length: -1.5 (must be finite and >= 0)"
        );
        assert_eq!(
            ConfigError::InvalidAngle {
                field: "lower_angle",
                value: f64::INFINITY
            }
            .to_string(),
            "Invalid lower_angle: inf (must be finite)"
        );
        assert_eq!(
            ConfigError::InvalidEpsilon(0.0).to_string(),
            "Invalid epsilon: 0 (must be finite and > 0)"
        );
    }
}
