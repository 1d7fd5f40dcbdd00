//! Caller-facing two-bone arm: a [`BoneChain`] paired with a solver.
//!
//! This is the surface an interactive shell drives. It takes targets and
//! manual angle overrides as plain calls and answers with angles and
//! positions; it never calls back out.

use tracing::debug;
use twobone_core::{geometry, ArmConfig, ConfigError, IkError, ValidationError, Vec2};

use crate::bone::BoneId;
use crate::chain::BoneChain;
use crate::solver::{IkSolution, SolverConfig, TwoBoneSolver};

/// Two-bone arm with a fixed base at the origin.
///
/// All mutation goes through `&mut self`; share across threads behind a
/// `Mutex` or `RwLock` so the two-angle update is never observed half-done.
#[derive(Debug, Clone)]
pub struct TwoBoneArm {
    chain: BoneChain,
    solver: TwoBoneSolver,
}

impl Default for TwoBoneArm {
    /// 150/150 arm posed at 150°/150°.
    fn default() -> Self {
        Self {
            chain: BoneChain::from_valid_parts(150.0, 150.0, 150.0, 150.0),
            solver: TwoBoneSolver::with_defaults(),
        }
    }
}

impl TwoBoneArm {
    #[must_use]
    pub const fn new(chain: BoneChain, solver: TwoBoneSolver) -> Self {
        Self { chain, solver }
    }

    /// Build from a validated [`ArmConfig`].
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from [`ArmConfig::validate`].
    pub fn from_config(config: &ArmConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let chain = BoneChain::with_pose(
            config.upper_length,
            config.lower_length,
            config.upper_angle,
            config.lower_angle,
        )?;
        let solver = TwoBoneSolver::new(SolverConfig {
            epsilon: config.epsilon,
        });
        Ok(Self::new(chain, solver))
    }

    #[must_use]
    pub const fn chain(&self) -> &BoneChain {
        &self.chain
    }

    #[must_use]
    pub const fn solver(&self) -> &TwoBoneSolver {
        &self.solver
    }

    /// Try to move the end effector to `target`.
    ///
    /// Returns whether the pose was updated. An unreachable target leaves
    /// the pose unchanged.
    pub fn solve_target(&mut self, target: &Vec2) -> bool {
        self.try_solve_target(target).is_ok()
    }

    /// Like [`solve_target`](Self::solve_target), but reports why a target
    /// was rejected.
    ///
    /// # Errors
    ///
    /// [`IkError::Unreachable`]; the pose is unchanged.
    pub fn try_solve_target(&mut self, target: &Vec2) -> Result<IkSolution, IkError> {
        self.chain.solve_target(&self.solver, target)
    }

    /// Current `(upper, lower)` angles in degrees.
    #[must_use]
    pub const fn angles(&self) -> (f64, f64) {
        self.chain.angles()
    }

    #[must_use]
    pub fn end_effector(&self) -> Vec2 {
        self.chain.end_effector()
    }

    #[must_use]
    pub fn joint_position(&self, id: BoneId) -> Vec2 {
        self.chain.joint_position(id)
    }

    /// Override one joint angle directly, bypassing the solver.
    ///
    /// # Errors
    ///
    /// [`ValidationError::NonFiniteAngle`] for NaN or infinite angles; the
    /// pose is left unchanged.
    pub fn set_angle_manually(&mut self, id: BoneId, angle: f64) -> Result<(), ValidationError> {
        self.chain.set_angle(id, angle)?;
        debug!(bone = %id, angle, "manual angle override");
        Ok(())
    }

    #[must_use]
    pub const fn length(&self, id: BoneId) -> f64 {
        self.chain.bone(id).length()
    }

    #[must_use]
    pub const fn arm_length(&self) -> f64 {
        self.chain.arm_length()
    }

    /// Unit vector from the base towards the end effector, or zero when the
    /// end effector sits on the base.
    #[must_use]
    pub fn reach_direction(&self) -> Vec2 {
        geometry::normalize(&self.end_effector()).unwrap_or_else(Vec2::zeros)
    }

    /// End-effector distance from the base as a fraction of the arm length.
    ///
    /// Zero for an arm with no length.
    #[must_use]
    pub fn reach_fraction(&self) -> f64 {
        if self.arm_length() > 0.0 {
            geometry::magnitude(&self.end_effector()) / self.arm_length()
        } else {
            0.0
        }
    }

    /// Retarget along the current reach direction so the end effector lands
    /// at `fraction` of the arm length from the base.
    ///
    /// Returns whether the pose was updated. With the end effector on the
    /// base the direction is undefined and the base itself is targeted.
    pub fn extend_to(&mut self, fraction: f64) -> bool {
        self.try_extend_to(fraction).is_ok()
    }

    /// Like [`extend_to`](Self::extend_to), but reports why the retarget
    /// was rejected.
    ///
    /// # Errors
    ///
    /// [`IkError::Unreachable`] when `fraction` lies outside the reachable
    /// range; the pose is unchanged.
    pub fn try_extend_to(&mut self, fraction: f64) -> Result<IkSolution, IkError> {
        let target = self.reach_direction() * (self.arm_length() * fraction);
        self.try_solve_target(&target)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
