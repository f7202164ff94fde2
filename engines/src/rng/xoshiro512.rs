//! xoshiro512 family
//!
//! 512 bits of state in eight u64 words. Large enough state for massively
//! parallel use; otherwise the same trade-offs as xoshiro256.
//!
//! Outputs (from the pre-advance state):
//! - `+`: `s[0] + s[2]`
//! - `++`: `rotl(s[0] + s[2], 17) + s[2]`
//! - `**`: `rotl(s[1] * 5, 7) * 9`

use std::marker::PhantomData;

use super::scrambler::{star_star, Plus, PlusPlus, StarStar};
use crate::core::engine::Engine;
use crate::core::seed::{SeedSource, Seedable};

/// Output function of a xoshiro512 variant
pub trait Xoshiro512Scrambler {
    fn scramble(s: &[u64; 8]) -> u64;
}

impl Xoshiro512Scrambler for Plus {
    #[inline]
    fn scramble(s: &[u64; 8]) -> u64 {
        s[0].wrapping_add(s[2])
    }
}

impl Xoshiro512Scrambler for PlusPlus {
    #[inline]
    fn scramble(s: &[u64; 8]) -> u64 {
        s[0].wrapping_add(s[2]).rotate_left(17).wrapping_add(s[2])
    }
}

impl Xoshiro512Scrambler for StarStar {
    #[inline]
    fn scramble(s: &[u64; 8]) -> u64 {
        star_star(s[1])
    }
}

/// xoshiro512 engine parameterized by its output scrambler
///
/// The state must not be all zero.
///
/// # Example
/// ```
/// use prng_engines::{Engine, Xoshiro512PlusPlus};
///
/// let mut rng = Xoshiro512PlusPlus::from_state([1, 2, 3, 4, 5, 6, 7, 8]);
/// assert_eq!(rng.next(), 524291);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro512<S> {
    state: [u64; 8],
    scrambler: PhantomData<S>,
}

pub type Xoshiro512Plus = Xoshiro512<Plus>;
pub type Xoshiro512PlusPlus = Xoshiro512<PlusPlus>;
pub type Xoshiro512StarStar = Xoshiro512<StarStar>;

impl<S: Xoshiro512Scrambler> Xoshiro512<S> {
    /// Create an engine from raw state words (copied verbatim)
    pub fn from_state(state: [u64; 8]) -> Self {
        Self {
            state,
            scrambler: PhantomData,
        }
    }

    /// Current state words
    pub fn state(&self) -> &[u64; 8] {
        &self.state
    }

    #[inline]
    fn advance(&mut self) {
        let s = &mut self.state;
        let t = s[1] << 11;

        s[2] ^= s[0];
        s[5] ^= s[1];
        s[1] ^= s[2];
        s[7] ^= s[3];
        s[3] ^= s[4];
        s[4] ^= s[5];
        s[0] ^= s[6];
        s[6] ^= s[7];

        s[6] ^= t;
        s[7] = s[7].rotate_left(21);
    }
}

impl<S: Xoshiro512Scrambler> Engine for Xoshiro512<S> {
    type Output = u64;

    fn min(&self) -> u64 {
        0
    }

    fn max(&self) -> u64 {
        u64::MAX
    }

    #[inline]
    fn next(&mut self) -> u64 {
        let result = S::scramble(&self.state);
        self.advance();
        result
    }
}

impl<S: Xoshiro512Scrambler> Seedable for Xoshiro512<S> {
    type Word = u64;
    const STATE_SIZE: usize = 8;

    fn from_seed_source<T: SeedSource<u64> + ?Sized>(source: &mut T) -> Self {
        let mut state = [0u64; 8];
        source.fill(&mut state[..]);
        Self::from_state(state)
    }
}
