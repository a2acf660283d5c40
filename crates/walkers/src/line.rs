use walkspace_engine::Walker;

use crate::rng::SplitMix64;

/// Symmetric random walker on the integer line.
///
/// Starts at 0; each step moves by -1 or +1 with equal probability.
#[derive(Debug, Clone)]
pub struct LineWalker {
    rng: SplitMix64,
}

impl LineWalker {
    /// Create a walker whose step sequence is determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SplitMix64::new(seed),
        }
    }
}

impl Walker for LineWalker {
    type State = i64;

    fn initialize(&mut self) -> i64 {
        0
    }

    fn step(&mut self, current: &i64) -> i64 {
        current + self.rng.coin_step()
    }
}
