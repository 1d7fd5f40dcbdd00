// twobone-core: Planar geometry, config and errors for two-bone IK.

pub mod config;
pub mod error;
pub mod geometry;

pub use config::{ArmConfig, DEFAULT_EPSILON};
pub use error::{ConfigError, IkError, TwoBoneError, ValidationError};
pub use geometry::Vec2;

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::{ArmConfig, DEFAULT_EPSILON};
    pub use crate::error::{ConfigError, IkError, TwoBoneError, ValidationError};
    pub use crate::geometry::{self, Vec2};
}
