use serde::{Deserialize, Serialize};

/// Splitmix64 ... a fast, high-quality deterministic PRNG.
///
/// Used instead of an OS-seeded generator so walks are reproducible across
/// platforms from a single `u64` seed. Serializable, so a walker can be
/// persisted mid-run and resumed with an identical random stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create a generator from a seed. Same seed, same stream.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next value in the stream.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform, independent draw from {-1, +1}.
    pub fn coin_step(&mut self) -> i64 {
        if self.next_u64() & 1 == 0 {
            -1
        } else {
            1
        }
    }
}
