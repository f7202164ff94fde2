//! xoshiro256 family
//!
//! 256 bits of state in four u64 words. All three variants share the same
//! linear state transition and differ only in how the output is derived
//! from the pre-advance state:
//!
//! | Variant | Output                           |
//! |---------|----------------------------------|
//! | `+`     | `s[0] + s[3]`                    |
//! | `++`    | `rotl(s[0] + s[3], 23) + s[0]`   |
//! | `**`    | `rotl(s[1] * 5, 7) * 9`          |
//!
//! `+` is the fastest and meant for floating-point generation (its lowest
//! three bits have low linear complexity). `++` and `**` are all-purpose.
//!
//! Reference: <https://prng.di.unimi.it/>

use std::marker::PhantomData;

use super::scrambler::{star_star, Plus, PlusPlus, StarStar};
use crate::core::engine::Engine;
use crate::core::seed::{SeedSource, Seedable};

/// Output function of a xoshiro256 variant
pub trait Xoshiro256Scrambler {
    fn scramble(s: &[u64; 4]) -> u64;
}

impl Xoshiro256Scrambler for Plus {
    #[inline]
    fn scramble(s: &[u64; 4]) -> u64 {
        s[0].wrapping_add(s[3])
    }
}

impl Xoshiro256Scrambler for PlusPlus {
    #[inline]
    fn scramble(s: &[u64; 4]) -> u64 {
        s[0].wrapping_add(s[3]).rotate_left(23).wrapping_add(s[0])
    }
}

impl Xoshiro256Scrambler for StarStar {
    #[inline]
    fn scramble(s: &[u64; 4]) -> u64 {
        star_star(s[1])
    }
}

/// xoshiro256 engine parameterized by its output scrambler
///
/// The state must not be all zero.
///
/// # Example
/// ```
/// use prng_engines::{Engine, Xoshiro256Plus};
///
/// let mut rng = Xoshiro256Plus::from_state([1, 2, 3, 4]);
/// assert_eq!(rng.next(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoshiro256<S> {
    state: [u64; 4],
    scrambler: PhantomData<S>,
}

pub type Xoshiro256Plus = Xoshiro256<Plus>;
pub type Xoshiro256PlusPlus = Xoshiro256<PlusPlus>;
pub type Xoshiro256StarStar = Xoshiro256<StarStar>;

impl<S: Xoshiro256Scrambler> Xoshiro256<S> {
    /// Create an engine from raw state words (copied verbatim)
    pub fn from_state(state: [u64; 4]) -> Self {
        Self {
            state,
            scrambler: PhantomData,
        }
    }

    /// Current state words
    pub fn state(&self) -> &[u64; 4] {
        &self.state
    }

    #[inline]
    fn advance(&mut self) {
        let s = &mut self.state;
        let t = s[1] << 17;

        s[2] ^= s[0];
        s[3] ^= s[1];
        s[1] ^= s[2];
        s[0] ^= s[3];

        s[2] ^= t;
        s[3] = s[3].rotate_left(45);
    }
}

impl<S: Xoshiro256Scrambler> Engine for Xoshiro256<S> {
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

impl<S: Xoshiro256Scrambler> Seedable for Xoshiro256<S> {
    type Word = u64;
    const STATE_SIZE: usize = 4;

    fn from_seed_source<T: SeedSource<u64> + ?Sized>(source: &mut T) -> Self {
        let mut state = [0u64; 4];
        source.fill(&mut state[..]);
        Self::from_state(state)
    }
}
