//! Scaled wrapper over a unit-interval source
//!
//! `ScaledRand` turns a uniform source in [0, 1) into integers in
//! [0, max] by single-precision multiplication:
//!
//! ```text
//! v = source.next_unit()          // [0, 1)
//! v >= 1.0  →  max
//! otherwise →  floor(v * max)
//! ```
//!
//! The float scaling loses low-bit precision for large `max` (only 24
//! mantissa bits survive, and the default source has 15 bits of output).
//! That coarse grid is a documented characteristic of this engine and is
//! kept as is.

use thiserror::Error;

use crate::core::engine::Engine;

/// Errors raised when constructing a `ScaledRand`
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("Scaled rand upper bound must be positive, got {max}")]
    NonPositiveMax { max: u32 },
}

/// Source of floats uniformly distributed in [0, 1)
pub trait UniformSource {
    fn next_unit(&mut self) -> f32;
}

/// Linear congruential source with the classic 15-bit `rand()` output
///
/// `state = state * 214013 + 2531011`, output `(state >> 16) & 0x7fff`.
/// Seeded like `srand(seed)`.
///
/// # Example
/// ```
/// use prng_engines::LegacyRand;
///
/// let mut rand = LegacyRand::new(1);
/// assert_eq!(rand.next_raw(), 41);
/// assert_eq!(rand.next_raw(), 18467);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyRand {
    state: u32,
}

impl LegacyRand {
    /// Largest raw output
    pub const RAND_MAX: u32 = 0x7fff;

    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next raw value in [0, RAND_MAX]
    pub fn next_raw(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(214_013).wrapping_add(2_531_011);
        (self.state >> 16) & Self::RAND_MAX
    }
}

impl UniformSource for LegacyRand {
    fn next_unit(&mut self) -> f32 {
        self.next_raw() as f32 / (Self::RAND_MAX + 1) as f32
    }
}

/// Integer engine in [0, max] built on a [`UniformSource`]
///
/// # Example
/// ```
/// use prng_engines::{Engine, ScaledRand};
///
/// let mut rng = ScaledRand::new(100, 1).unwrap();
/// assert_eq!(rng.max(), 100);
/// assert_eq!(rng.next(), 0);
/// assert_eq!(rng.next(), 56);
/// ```
#[derive(Debug, Clone)]
pub struct ScaledRand<U = LegacyRand> {
    source: U,
    max: u32,
}

impl ScaledRand<LegacyRand> {
    /// Create an engine over the default source seeded with `seed`
    ///
    /// # Errors
    /// `RangeError::NonPositiveMax` if `max` is zero.
    pub fn new(max: u32, seed: u32) -> Result<Self, RangeError> {
        Self::with_source(max, LegacyRand::new(seed))
    }
}

impl<U: UniformSource> ScaledRand<U> {
    /// Create an engine over an arbitrary unit-interval source
    pub fn with_source(max: u32, source: U) -> Result<Self, RangeError> {
        if max == 0 {
            return Err(RangeError::NonPositiveMax { max });
        }
        Ok(Self { source, max })
    }
}

impl<U: UniformSource> Engine for ScaledRand<U> {
    type Output = u32;

    fn min(&self) -> u32 {
        0
    }

    fn max(&self) -> u32 {
        self.max
    }

    fn next(&mut self) -> u32 {
        let v = self.source.next_unit();
        if v >= 1.0 {
            return self.max;
        }

        // Saturating float-to-int cast; the min() keeps rounding inside the bound
        ((v * self.max as f32) as u32).min(self.max)
    }
}
