//! MT19937 (32-bit Mersenne Twister)
//!
//! The platform baseline the other engines are usually compared against.
//! 624 words of state regenerated in one block ("twist") every 624 draws,
//! then tempered on output. Period 2^19937 - 1.

use crate::core::engine::Engine;
use crate::core::seed::{SeedSource, Seedable};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
const INIT_MULTIPLIER: u32 = 1_812_433_253;

/// Mersenne Twister engine
///
/// # Example
/// ```
/// use prng_engines::{Engine, Mt19937};
///
/// let mut rng = Mt19937::new(Mt19937::DEFAULT_SEED);
/// assert_eq!(rng.next(), 3499211612);
/// assert_eq!(rng.next(), 581869302);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mt19937 {
    state: [u32; N],
    index: usize,
}

impl Mt19937 {
    pub const DEFAULT_SEED: u32 = 5489;

    /// Seed from a single 32-bit word (standard linear initialization)
    pub fn new(seed: u32) -> Self {
        let mut state = [0u32; N];
        state[0] = seed;
        for i in 1..N {
            let prev = state[i - 1];
            state[i] = INIT_MULTIPLIER
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        Self { state, index: N }
    }

    /// Create an engine from raw state words
    ///
    /// If every significant bit is zero (the top bit of word 0 and all of
    /// words 1..624), word 0 is replaced by `0x8000_0000`.
    pub fn from_state(mut state: [u32; N]) -> Self {
        if state[0] & UPPER_MASK == 0 && state[1..].iter().all(|&w| w == 0) {
            state[0] = UPPER_MASK;
        }
        Self { state, index: N }
    }

    /// Current state words
    pub fn state(&self) -> &[u32; N] {
        &self.state
    }

    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mag = if y & 1 == 0 { 0 } else { MATRIX_A };
            self.state[i] = self.state[(i + M) % N] ^ (y >> 1) ^ mag;
        }
        self.index = 0;
    }
}

impl Default for Mt19937 {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SEED)
    }
}

impl Engine for Mt19937 {
    type Output = u32;

    fn min(&self) -> u32 {
        0
    }

    fn max(&self) -> u32 {
        u32::MAX
    }

    fn next(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }

        let mut y = self.state[self.index];
        self.index += 1;

        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^ (y >> 18)
    }
}

impl Seedable for Mt19937 {
    type Word = u32;
    const STATE_SIZE: usize = N;

    fn from_seed_source<T: SeedSource<u32> + ?Sized>(source: &mut T) -> Self {
        let mut state = [0u32; N];
        source.fill(&mut state[..]);
        Self::from_state(state)
    }
}
