use serde::{Deserialize, Serialize};
use walkspace_engine::Walker;

use crate::rng::SplitMix64;

/// Line-walker state bundling position with per-walker memory.
///
/// The visit counter travels inside the state rather than in a captured
/// mutable variable, so any number of counting walkers can run side by side
/// without sharing memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountingState {
    /// Current position on the integer line.
    pub position: i64,
    /// Times the walker has stood at the origin, counting the start.
    pub origin_visits: u64,
}

/// Random line walker that remembers how often it returned to the origin.
#[derive(Debug, Clone)]
pub struct CountingWalker {
    rng: SplitMix64,
}

impl CountingWalker {
    /// Create a walker whose step sequence is determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SplitMix64::new(seed),
        }
    }
}

impl Walker for CountingWalker {
    type State = CountingState;

    fn initialize(&mut self) -> CountingState {
        CountingState {
            position: 0,
            origin_visits: 1,
        }
    }

    fn step(&mut self, current: &CountingState) -> CountingState {
        let position = current.position + self.rng.coin_step();
        CountingState {
            position,
            origin_visits: current.origin_visits + u64::from(position == 0),
        }
    }
}
