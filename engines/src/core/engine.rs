//! Capability contract
//!
//! Every generator in this crate implements [`Engine`]. Callers that only
//! need "give me the next word" (the distribution adapter, the sampling
//! driver, tests) are written against the trait and work unchanged with any
//! engine.
//!
//! # Contract
//!
//! - `min()` is always 0
//! - `max()` is the largest value `next()` can return
//! - `next()` advances the state and returns the next output
//!
//! `next()` must be a pure function of the visible state: two engines in
//! the same state produce the same output and end in the same state. It
//! never allocates, blocks or performs I/O.

/// Shared surface of every PRNG engine
///
/// # Example
/// ```
/// use prng_engines::{Engine, Xoshiro256Plus};
///
/// let mut rng = Xoshiro256Plus::from_state([1, 2, 3, 4]);
/// assert_eq!(rng.min(), 0);
/// assert_eq!(rng.max(), u64::MAX);
/// assert_eq!(rng.next(), 5);
/// ```
pub trait Engine {
    /// Output word type (`u32` or `u64`)
    type Output: Copy + Into<u64>;

    /// Smallest value `next()` can return
    fn min(&self) -> Self::Output;

    /// Largest value `next()` can return
    fn max(&self) -> Self::Output;

    /// Advance the state and return the next output
    fn next(&mut self) -> Self::Output;

    /// Number of distinct steps between `min()` and `max()`, widened to u64
    fn range(&self) -> u64 {
        let max: u64 = self.max().into();
        let min: u64 = self.min().into();
        max - min
    }
}

impl<E: Engine + ?Sized> Engine for &mut E {
    type Output = E::Output;

    fn min(&self) -> Self::Output {
        (**self).min()
    }

    fn max(&self) -> Self::Output {
        (**self).max()
    }

    fn next(&mut self) -> Self::Output {
        (**self).next()
    }
}
