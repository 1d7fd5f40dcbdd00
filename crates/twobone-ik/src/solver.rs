//! Closed-form analytic two-bone IK solver.
//!
//! Solves for the two joint angles that place the tip of a planar two-bone
//! chain on a target, using the law of cosines for the elbow and a single
//! `atan2` for the shoulder. The elbow angle always comes from `acos`, so it
//! lies in `[0, 180]` degrees; the mirrored bend is never produced.

use tracing::{debug, trace};
use twobone_core::{geometry, IkError, Vec2, DEFAULT_EPSILON};

/// Configuration for the analytic solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Below this, `2 * upper * lower` is treated as zero and the degenerate
    /// (zero-length bone) case applies. Also the tolerance on the squared
    /// distance to the degenerate reach circle.
    pub epsilon: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

/// Joint angles of a successful solve, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IkSolution {
    /// Upper bone angle, relative to the base frame's +x axis.
    pub upper_angle: f64,
    /// Lower bone angle, relative to the upper bone. Always in `[0, 180]`.
    pub lower_angle: f64,
}

impl IkSolution {
    #[must_use]
    pub const fn angles(&self) -> (f64, f64) {
        (self.upper_angle, self.lower_angle)
    }
}

/// Analytic two-bone IK solver.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoBoneSolver {
    config: SolverConfig,
}

impl TwoBoneSolver {
    /// Create a new solver with the given configuration.
    #[must_use]
    pub const fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(SolverConfig::default())
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve for the joint angles placing the chain tip at `target`.
    ///
    /// `target` is relative to the fixed base of the upper bone. A target at
    /// the base itself is valid: the shoulder angle comes out of `atan2(0, 0)`.
    ///
    /// # Errors
    ///
    /// [`IkError::Unreachable`] when the target lies outside the annulus
    /// `[|upper - lower|, upper + lower]`, or off the reach circle when a bone
    /// has (near) zero length.
    pub fn solve(
        &self,
        upper_length: f64,
        lower_length: f64,
        target: &Vec2,
    ) -> Result<IkSolution, IkError> {
        let epsilon = self.config.epsilon;
        let (target_x, target_y) = (target.x, target.y);
        let target_dist_sqr = target_x * target_x + target_y * target_y;
        let total_length = upper_length + lower_length;

        // NaN slips through every range comparison below
        if !target_dist_sqr.is_finite() {
            return Err(unreachable(
                target_dist_sqr,
                (upper_length - lower_length).abs(),
                total_length,
            ));
        }

        let denom = 2.0 * upper_length * lower_length;
        let (cos_angle2, sin_angle2, angle2) = if denom > epsilon {
            let cos_angle2 = (target_dist_sqr
                - upper_length * upper_length
                - lower_length * lower_length)
                / denom;

            // Outside the legal cosine range there is no solution.
            if !(-1.0..=1.0).contains(&cos_angle2) {
                return Err(unreachable(
                    target_dist_sqr,
                    (upper_length - lower_length).abs(),
                    total_length,
                ));
            }

            let cos_angle2 = cos_angle2.clamp(-1.0, 1.0);
            let angle2 = cos_angle2.acos();
            (cos_angle2, angle2.sin(), angle2)
        } else {
            // A zero-length bone collapses the reachable set to the circle of
            // radius `total_length`; only the shoulder angle matters.
            let total_len_sqr = total_length * total_length;
            if target_dist_sqr < total_len_sqr - epsilon || target_dist_sqr > total_len_sqr + epsilon {
                return Err(unreachable(target_dist_sqr, total_length, total_length));
            }
            (1.0, 0.0, 0.0)
        };

        let tri_adjacent = upper_length + lower_length * cos_angle2;
        let tri_opposite = lower_length * sin_angle2;
        let tan_y = target_y * tri_adjacent - target_x * tri_opposite;
        let tan_x = target_x * tri_adjacent + target_y * tri_opposite;
        let angle1 = tan_y.atan2(tan_x);

        let solution = IkSolution {
            upper_angle: geometry::to_degrees(angle1),
            lower_angle: geometry::to_degrees(angle2),
        };
        trace!(
            target_x,
            target_y,
            upper = solution.upper_angle,
            lower = solution.lower_angle,
            "two-bone solve"
        );
        Ok(solution)
    }
}

fn unreachable(target_dist_sqr: f64, min_reach: f64, max_reach: f64) -> IkError {
    let distance = target_dist_sqr.sqrt();
    debug!(distance, min_reach, max_reach, "target unreachable");
    IkError::Unreachable {
        distance,
        min_reach,
        max_reach,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
