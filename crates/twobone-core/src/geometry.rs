//! Stateless planar vector helpers.
//!
//! All angles at this boundary are in degrees, matching how bone angles are
//! stored. Rotation is counter-clockwise in a y-up frame.

use nalgebra::{Rotation2, Vector2};

/// Planar vector / point in the chain's base frame.
pub type Vec2 = Vector2<f64>;

/// Rotate `v` counter-clockwise by `angle_degrees`.
#[must_use]
pub fn rotate(v: &Vec2, angle_degrees: f64) -> Vec2 {
    Rotation2::new(to_radians(angle_degrees)) * v
}

#[must_use]
pub fn add(a: &Vec2, b: &Vec2) -> Vec2 {
    a + b
}

/// Unit vector in the direction of `v`.
///
/// Returns `None` for the zero vector, where no direction exists.
#[must_use]
pub fn normalize(v: &Vec2) -> Option<Vec2> {
    v.try_normalize(0.0)
}

#[must_use]
pub fn magnitude(v: &Vec2) -> f64 {
    v.norm()
}

#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
