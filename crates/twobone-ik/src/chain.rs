//! Two-bone planar chain and its forward kinematics.
//!
//! A [`BoneChain`] owns exactly two bones: `upper`, whose base is the fixed
//! origin, and `lower`, attached to the tip of `upper`. Bone angles are in
//! degrees, each relative to its parent, so the lower bone's world angle is
//! the sum of both.

use twobone_core::{geometry, IkError, ValidationError, Vec2};

use crate::bone::{check_angle, Bone, BoneId};
use crate::solver::{IkSolution, TwoBoneSolver};

/// An upper/lower bone pair with a fixed base at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct BoneChain {
    upper: Bone,
    lower: Bone,
    arm_length: f64,
}

impl BoneChain {
    /// Build a chain with both angles at zero (arm stretched along +x).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLength`] for a negative or
    /// non-finite length.
    pub fn new(upper_length: f64, lower_length: f64) -> Result<Self, ValidationError> {
        Self::with_pose(upper_length, lower_length, 0.0, 0.0)
    }

    /// Build a chain with an initial pose (angles in degrees).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] for an invalid length or a non-finite
    /// angle.
    pub fn with_pose(
        upper_length: f64,
        lower_length: f64,
        upper_angle: f64,
        lower_angle: f64,
    ) -> Result<Self, ValidationError> {
        let upper = Bone::new(upper_length, upper_angle, BoneId::Upper.parent())?;
        let lower = Bone::new(lower_length, lower_angle, BoneId::Lower.parent())?;
        Ok(Self {
            arm_length: upper_length + lower_length,
            upper,
            lower,
        })
    }

    /// Caller guarantees lengths and angles already passed validation.
    pub(crate) const fn from_valid_parts(
        upper_length: f64,
        lower_length: f64,
        upper_angle: f64,
        lower_angle: f64,
    ) -> Self {
        Self {
            upper: Bone::new_unchecked(upper_length, upper_angle, BoneId::Upper.parent()),
            lower: Bone::new_unchecked(lower_length, lower_angle, BoneId::Lower.parent()),
            arm_length: upper_length + lower_length,
        }
    }

    #[must_use]
    pub const fn bone(&self, id: BoneId) -> &Bone {
        match id {
            BoneId::Upper => &self.upper,
            BoneId::Lower => &self.lower,
        }
    }

    #[must_use]
    pub const fn upper(&self) -> &Bone {
        &self.upper
    }

    #[must_use]
    pub const fn lower(&self) -> &Bone {
        &self.lower
    }

    /// Sum of both bone lengths; the outer radius of the reachable annulus.
    #[must_use]
    pub const fn arm_length(&self) -> f64 {
        self.arm_length
    }

    /// Inner radius of the reachable annulus.
    #[must_use]
    pub fn min_reach(&self) -> f64 {
        (self.upper.length() - self.lower.length()).abs()
    }

    /// Current `(upper, lower)` angles in degrees.
    #[must_use]
    pub const fn angles(&self) -> (f64, f64) {
        (self.upper.angle(), self.lower.angle())
    }

    /// World angle of a bone: its own angle plus its parent's.
    #[must_use]
    pub fn cumulative_angle(&self, id: BoneId) -> f64 {
        let bone = self.bone(id);
        bone.angle() + bone.parent().map_or(0.0, |parent| self.bone(parent).angle())
    }

    /// Tip of `id` relative to its own base.
    #[must_use]
    pub fn end_offset(&self, id: BoneId) -> Vec2 {
        geometry::rotate(
            &Vec2::new(self.bone(id).length(), 0.0),
            self.cumulative_angle(id),
        )
    }

    /// Base of `id` in the chain frame.
    #[must_use]
    pub fn joint_position(&self, id: BoneId) -> Vec2 {
        match id {
            BoneId::Upper => Vec2::zeros(),
            BoneId::Lower => self.end_offset(BoneId::Upper),
        }
    }

    /// Tip of the lower bone in the chain frame.
    #[must_use]
    pub fn end_effector(&self) -> Vec2 {
        geometry::add(
            &self.end_offset(BoneId::Upper),
            &self.end_offset(BoneId::Lower),
        )
    }

    /// Write both angles at once. On error neither angle changes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFiniteAngle`] if either angle is NaN or
    /// infinite.
    pub fn set_angles(&mut self, upper_angle: f64, lower_angle: f64) -> Result<(), ValidationError> {
        check_angle(upper_angle)?;
        check_angle(lower_angle)?;
        self.write_angles(upper_angle, lower_angle);
        Ok(())
    }

    /// The single point where the pose is stored. Both angles must be finite.
    fn write_angles(&mut self, upper_angle: f64, lower_angle: f64) {
        self.upper.set_angle_unchecked(upper_angle);
        self.lower.set_angle_unchecked(lower_angle);
    }

    /// Write one angle, leaving the other as is.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonFiniteAngle`]; the pose is unchanged.
    pub fn set_angle(&mut self, id: BoneId, angle: f64) -> Result<(), ValidationError> {
        let (upper, lower) = match id {
            BoneId::Upper => (angle, self.lower.angle()),
            BoneId::Lower => (self.upper.angle(), angle),
        };
        self.set_angles(upper, lower)
    }

    /// Solve for `target` and apply the result.
    ///
    /// # Errors
    ///
    /// [`IkError::Unreachable`] if the target is out of reach; the pose is
    /// left exactly as it was.
    pub fn solve_target(
        &mut self,
        solver: &TwoBoneSolver,
        target: &Vec2,
    ) -> Result<IkSolution, IkError> {
        let solution = solver.solve(self.upper.length(), self.lower.length(), target)?;
        // Solver output is always finite.
        let (upper_angle, lower_angle) = solution.angles();
        self.write_angles(upper_angle, lower_angle);
        Ok(solution)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn arm() -> BoneChain {
        BoneChain::new(150.0, 150.0).unwrap()
    }

    #[test]
    fn zero_pose_stretched_along_x() {
        let chain = arm();
        assert_relative_eq!(chain.joint_position(BoneId::Upper), Vec2::zeros());
        assert_relative_eq!(chain.joint_position(BoneId::Lower), Vec2::new(150.0, 0.0));
        assert_relative_eq!(chain.end_effector(), Vec2::new(300.0, 0.0));
    }

    #[test]
    fn arm_length_and_min_reach() {
        let chain = BoneChain::new(100.0, 50.0).unwrap();
        assert_relative_eq!(chain.arm_length(), 150.0);
        assert_relative_eq!(chain.min_reach(), 50.0);
    }

    #[test]
    fn lower_angle_is_relative_to_upper() {
        let chain = BoneChain::with_pose(100.0, 50.0, 90.0, -90.0).unwrap();
        assert_relative_eq!(chain.cumulative_angle(BoneId::Upper), 90.0);
        assert_relative_eq!(chain.cumulative_angle(BoneId::Lower), 0.0);
        let elbow = chain.joint_position(BoneId::Lower);
        assert_relative_eq!(elbow.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(elbow.y, 100.0, epsilon = 1e-12);
        let tip = chain.end_effector();
        assert_relative_eq!(tip.x, 50.0, epsilon = 1e-12);
        assert_relative_eq!(tip.y, 100.0, epsilon = 1e-12);
    }

    #[test]
    fn end_offset_of_lower_uses_parent_angle() {
        let chain = BoneChain::with_pose(10.0, 20.0, 45.0, 45.0).unwrap();
        let offset = chain.end_offset(BoneId::Lower);
        assert_relative_eq!(offset.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(offset.y, 20.0, epsilon = 1e-12);
    }

    #[test]
    fn set_angles_writes_both() {
        let mut chain = arm();
        chain.set_angles(12.0, -34.0).unwrap();
        assert_eq!(chain.angles(), (12.0, -34.0));
    }

    #[test]
    fn set_angles_rejects_nan_without_mutation() {
        let mut chain = BoneChain::with_pose(1.0, 1.0, 5.0, 6.0).unwrap();
        assert!(chain.set_angles(1.0, f64::NAN).is_err());
        assert!(chain.set_angles(f64::INFINITY, 1.0).is_err());
        assert_eq!(chain.angles(), (5.0, 6.0));
    }

    #[test]
    fn set_single_angle() {
        let mut chain = BoneChain::with_pose(1.0, 1.0, 5.0, 6.0).unwrap();
        chain.set_angle(BoneId::Lower, 60.0).unwrap();
        assert_eq!(chain.angles(), (5.0, 60.0));
        chain.set_angle(BoneId::Upper, -10.0).unwrap();
        assert_eq!(chain.angles(), (-10.0, 60.0));
    }

    #[test]
    fn invalid_length_rejected() {
        assert!(BoneChain::new(-1.0, 1.0).is_err());
        assert!(BoneChain::new(1.0, f64::NAN).is_err());
    }

    #[test]
    fn solve_target_reaches_target() {
        let mut chain = arm();
        let target = Vec2::new(-120.0, 75.0);
        chain
            .solve_target(&TwoBoneSolver::with_defaults(), &target)
            .unwrap();
        assert_relative_eq!(chain.end_effector(), target, epsilon = 1e-9);
    }

    #[test]
    fn solve_target_stores_returned_angles() {
        let mut chain = BoneChain::with_pose(100.0, 50.0, 12.0, 34.0).unwrap();
        let solution = chain
            .solve_target(&TwoBoneSolver::with_defaults(), &Vec2::new(30.0, 110.0))
            .unwrap();
        assert_eq!(chain.angles(), solution.angles());
        assert!((0.0..=180.0).contains(&chain.lower().angle()));
    }

    #[test]
    fn failed_solve_leaves_pose() {
        let mut chain = BoneChain::with_pose(150.0, 150.0, 150.0, 150.0).unwrap();
        let before = chain.clone();
        let result = chain.solve_target(&TwoBoneSolver::with_defaults(), &Vec2::new(0.0, 301.0));
        assert!(result.is_err());
        assert_eq!(chain, before);
    }

    #[test]
    fn bones_have_fixed_parent_relation() {
        let chain = arm();
        assert_eq!(chain.upper().parent(), None);
        assert_eq!(chain.lower().parent(), Some(BoneId::Upper));
    }
}
