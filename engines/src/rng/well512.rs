//! WELL512 generator
//!
//! Well Equidistributed Long-period Linear generator with 512 bits of state
//! (sixteen u32 words) and a rotating cursor. Period 2^512 - 1.
//!
//! The shift amounts and the tempering mask `0xDA442D24` are fixed by the
//! published algorithm.

use crate::core::engine::Engine;
use crate::core::seed::{SeedSource, Seedable};

const N: usize = 16;
const MASK: u32 = 0xda44_2d24;

/// xor-shift-left
#[inline]
fn xsl(shift: u32, value: u32) -> u32 {
    value ^ (value << shift)
}

/// xor-shift-right
#[inline]
fn xsr(shift: u32, value: u32) -> u32 {
    value ^ (value >> shift)
}

/// xor-shift-left, masked
#[inline]
fn xslm(shift: u32, mask: u32, value: u32) -> u32 {
    value ^ ((value << shift) & mask)
}

/// WELL512 engine
///
/// The state must not be all zero.
///
/// # Example
/// ```
/// use prng_engines::{Engine, Well512};
///
/// let mut seed = [0u32; 16];
/// for (i, word) in seed.iter_mut().enumerate() {
///     *word = i as u32 + 1;
/// }
///
/// let mut rng = Well512::from_state(seed);
/// assert_eq!(rng.next(), 2692481146);
/// assert_eq!(rng.index(), 15);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Well512 {
    state: [u32; N],
    index: usize,
}

impl Well512 {
    /// Create an engine from raw state words, cursor at 0
    pub fn from_state(state: [u32; N]) -> Self {
        Self { state, index: 0 }
    }

    /// Current state words
    pub fn state(&self) -> &[u32; N] {
        &self.state
    }

    /// Current cursor position in [0, 16)
    pub fn index(&self) -> usize {
        self.index
    }
}

impl Engine for Well512 {
    type Output = u32;

    fn min(&self) -> u32 {
        0
    }

    fn max(&self) -> u32 {
        u32::MAX
    }

    #[inline]
    fn next(&mut self) -> u32 {
        let i = self.index;
        let s = &mut self.state;

        let z0 = s[(i + 15) & 0x0f];
        let z1 = xsl(16, s[i]) ^ xsl(15, s[(i + 13) & 0x0f]);
        let z2 = xsr(11, s[(i + 9) & 0x0f]);
        s[i] = z1 ^ z2;
        let t = xslm(5, MASK, s[i]);

        let i = (i + N - 1) & 0x0f;
        s[i] = xsl(2, z0) ^ xsl(18, z1) ^ (z2 << 28) ^ t;
        self.index = i;

        s[i]
    }
}

impl Seedable for Well512 {
    type Word = u32;
    const STATE_SIZE: usize = N;

    fn from_seed_source<T: SeedSource<u32> + ?Sized>(source: &mut T) -> Self {
        let mut state = [0u32; N];
        source.fill(&mut state[..]);
        Self::from_state(state)
    }
}
