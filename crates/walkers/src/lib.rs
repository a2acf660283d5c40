//! Reference walkers for the walk engine.
//!
//! Each walker owns its RNG, so separate instances never share randomness
//! and the same seed always reproduces the same trajectory.
//!
//! # Invariants
//! - Every step moves by exactly ±1 along each axis.
//! - Walker memory beyond the RNG lives in the walker's State, never in
//!   shared captured state.

pub mod counting;
pub mod line;
pub mod plane;
pub mod rng;

pub use counting::{CountingState, CountingWalker};
pub use line::LineWalker;
pub use plane::PlaneWalker;
pub use rng::SplitMix64;
