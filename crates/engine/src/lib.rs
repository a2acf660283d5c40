//! Walk engine: generic stepwise simulation driving a pluggable
//! initializer/step pair and capturing the resulting trajectory.
//!
//! The engine never inspects walker state. It calls the supplied initializer
//! once, the supplied step function exactly `steps` times, and records an
//! independent snapshot of every state produced.
//!
//! # Invariants
//! - A returned trajectory has exactly `steps + 1` elements and is never empty.
//! - Stored trajectory elements are snapshots: later steps never mutate them.
//! - Negative step counts fail before any callback is invoked.
//! - Callback errors propagate to the caller; no partial trajectory escapes.

pub mod engine;
pub mod trajectory;

pub use engine::{run, run_walker, try_run, EngineError, RunError, Walker};
pub use trajectory::Trajectory;
