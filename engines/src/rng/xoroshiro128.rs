//! xoroshiro128 family
//!
//! 128 bits of state in two u64 words. Unlike the xoshiro families the
//! rotation/shift constants of the state transition depend on the variant,
//! so the scrambler trait carries them alongside the output function:
//!
//! | Variant | Output                     | (A, B, C)    |
//! |---------|----------------------------|--------------|
//! | `+`     | `s0 + s1`                  | (24, 16, 37) |
//! | `++`    | `rotl(s0 + s1, 17) + s0`   | (49, 21, 28) |
//! | `**`    | `rotl(s0 * 5, 7) * 9`      | (24, 16, 37) |

use std::marker::PhantomData;

use super::scrambler::{star_star, Plus, PlusPlus, StarStar};
use crate::core::engine::Engine;
use crate::core::seed::{SeedSource, Seedable};

/// Output function and transition constants of a xoroshiro128 variant
pub trait Xoroshiro128Scrambler {
    /// Rotation applied to `s0`
    const A: u32;
    /// Shift applied to `s1` after mixing
    const B: u32;
    /// Rotation of the new `s1`
    const C: u32;

    fn scramble(s0: u64, s1: u64) -> u64;
}

impl Xoroshiro128Scrambler for Plus {
    const A: u32 = 24;
    const B: u32 = 16;
    const C: u32 = 37;

    #[inline]
    fn scramble(s0: u64, s1: u64) -> u64 {
        s0.wrapping_add(s1)
    }
}

impl Xoroshiro128Scrambler for PlusPlus {
    const A: u32 = 49;
    const B: u32 = 21;
    const C: u32 = 28;

    #[inline]
    fn scramble(s0: u64, s1: u64) -> u64 {
        s0.wrapping_add(s1).rotate_left(17).wrapping_add(s0)
    }
}

impl Xoroshiro128Scrambler for StarStar {
    const A: u32 = 24;
    const B: u32 = 16;
    const C: u32 = 37;

    #[inline]
    fn scramble(s0: u64, _s1: u64) -> u64 {
        star_star(s0)
    }
}

/// xoroshiro128 engine parameterized by its output scrambler
///
/// The state must not be all zero.
///
/// # Example
/// ```
/// use prng_engines::{Engine, Xoroshiro128Plus};
///
/// let mut rng = Xoroshiro128Plus::from_state([1, 2]);
/// assert_eq!(rng.next(), 3);
/// assert_eq!(rng.next(), 412333834243);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro128<S> {
    state: [u64; 2],
    scrambler: PhantomData<S>,
}

pub type Xoroshiro128Plus = Xoroshiro128<Plus>;
pub type Xoroshiro128PlusPlus = Xoroshiro128<PlusPlus>;
pub type Xoroshiro128StarStar = Xoroshiro128<StarStar>;

impl<S: Xoroshiro128Scrambler> Xoroshiro128<S> {
    /// Create an engine from raw state words (copied verbatim)
    pub fn from_state(state: [u64; 2]) -> Self {
        Self {
            state,
            scrambler: PhantomData,
        }
    }

    /// Current state words
    pub fn state(&self) -> &[u64; 2] {
        &self.state
    }
}

impl<S: Xoroshiro128Scrambler> Engine for Xoroshiro128<S> {
    type Output = u64;

    fn min(&self) -> u64 {
        0
    }

    fn max(&self) -> u64 {
        u64::MAX
    }

    #[inline]
    fn next(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = S::scramble(s0, s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(S::A) ^ s1 ^ (s1 << S::B);
        self.state[1] = s1.rotate_left(S::C);

        result
    }
}

impl<S: Xoroshiro128Scrambler> Seedable for Xoroshiro128<S> {
    type Word = u64;
    const STATE_SIZE: usize = 2;

    fn from_seed_source<T: SeedSource<u64> + ?Sized>(source: &mut T) -> Self {
        let mut state = [0u64; 2];
        source.fill(&mut state[..]);
        Self::from_state(state)
    }
}
