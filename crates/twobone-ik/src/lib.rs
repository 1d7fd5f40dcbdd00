//! Closed-form two-bone inverse kinematics in the plane.
//!
//! Provides the bone/chain data model with forward kinematics, and an
//! analytic solver that places the tip of a two-bone chain on a target
//! using the law of cosines. Failure is an ordinary outcome: an unreachable
//! target leaves the chain pose untouched.
//!
//! # Architecture
//!
//! ```text
//! target ──► TwoBoneSolver ──► IkSolution ──► BoneChain::set_angles
//!                                                  │
//!                       joint / end-effector ◄─────┘ forward kinematics
//! ```
//!
//! [`TwoBoneArm`] bundles a chain with a solver behind the small API an
//! interactive front end needs.
//!
//! # Quick Start
//!
//! ```
//! use twobone_ik::prelude::*;
//!
//! let mut arm = TwoBoneArm::default();
//! assert!(arm.solve_target(&Vec2::new(120.0, 80.0)));
//! let tip = arm.end_effector();
//! assert!((tip - Vec2::new(120.0, 80.0)).norm() < 1e-9);
//! ```

pub mod arm;
pub mod bone;
pub mod chain;
pub mod solver;

pub use arm::TwoBoneArm;
pub use bone::{Bone, BoneId};
pub use chain::BoneChain;
pub use solver::{IkSolution, SolverConfig, TwoBoneSolver};

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::arm::TwoBoneArm;
    pub use crate::bone::{Bone, BoneId};
    pub use crate::chain::BoneChain;
    pub use crate::solver::{IkSolution, SolverConfig, TwoBoneSolver};
    pub use twobone_core::prelude::*;
}
