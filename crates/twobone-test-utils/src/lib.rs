//! Shared test fixtures and utilities for twobone crates.
//!
//! Deterministic RNG setup and target sampling inside and outside a
//! two-bone chain's reachable annulus.

pub mod rng;
pub mod targets;

// ---------------------------------------------------------------------------
// Re-exports for convenience
// ---------------------------------------------------------------------------

pub use rng::seeded_rng;
pub use targets::{point_at, reachable_target, unreachable_target};
