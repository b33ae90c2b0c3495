//! Seeded random stream for the opponent's weighted choices.

/// PCG-XSH-RR: 32-bit output from 64-bit LCG state.
///
/// Each draw advances the state, so two streams built from the same seed
/// yield the same sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PcgStream {
    state: u64,
}

impl PcgStream {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        Self {
            state: scramble(seed),
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        // Xorshift high bits, then rotate by the top five bits.
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Uniform index in `0..len`. Returns 0 for an empty range.
    pub fn next_index(&mut self, len: u32) -> u32 {
        if len == 0 {
            return 0;
        }
        self.next_u32() % len
    }
}

/// Spreads small consecutive seeds across the state space.
fn scramble(seed: u64) -> u64 {
    let mut hash = seed;
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
