//! Target sampling relative to a chain's reachable annulus.

use nalgebra::Vector2;
use rand::Rng;

/// Point at `distance` from the origin, `angle_degrees` counter-clockwise from +x.
#[must_use]
pub fn point_at(distance: f64, angle_degrees: f64) -> Vector2<f64> {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    Vector2::new(distance * cos, distance * sin)
}

/// Uniform direction, distance strictly inside `[|upper - lower|, upper + lower]`.
///
/// A margin of 1e-6 of the arm length is kept from both boundaries so
/// floating-point rounding cannot push a sample out of reach.
pub fn reachable_target(rng: &mut impl Rng, upper: f64, lower: f64) -> Vector2<f64> {
    let margin = (upper + lower) * 1e-6;
    let min = (upper - lower).abs() + margin;
    let max = upper + lower - margin;
    let distance = if max > min { rng.gen_range(min..max) } else { min };
    point_at(distance, rng.gen_range(0.0..360.0))
}

/// Uniform direction, distance in `(upper + lower, 2 * (upper + lower) + 1]`.
pub fn unreachable_target(rng: &mut impl Rng, upper: f64, lower: f64) -> Vector2<f64> {
    let total = upper + lower;
    let distance = rng.gen_range(total + 1.0..=2.0 * total + 1.0);
    point_at(distance, rng.gen_range(0.0..360.0))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
