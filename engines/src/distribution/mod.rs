//! Uniform integer adapter
//!
//! Maps the output of any [`Engine`] uniformly onto an inclusive range
//! `[lo, hi]`, using nothing but `min()`, `max()` and `next()`.
//!
//! # Strategy
//!
//! Let `erange = max - min` (engine) and `urange = hi - lo` (target):
//!
//! 1. **Equal**: the engine already covers the target, use `next() - min`
//! 2. **Downscale** (`erange > urange`): split the engine range into
//!    `urange + 1` equal buckets and reject draws past the last full bucket
//! 3. **Upscale** (`erange < urange`): build the value from a recursively
//!    sampled high part times `erange + 1` plus one fresh low draw,
//!    retrying when the sum leaves the target range
//!
//! Rejection keeps the result exactly uniform whenever the engine is.
//!
//! # Example
//!
//! ```
//! use prng_engines::{UniformInt, Xoshiro256PlusPlus};
//!
//! let dist = UniformInt::new(1, 6).unwrap();
//! let mut rng = Xoshiro256PlusPlus::from_state([1, 2, 3, 4]);
//! let roll = dist.sample(&mut rng);
//! assert!((1..=6).contains(&roll));
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::engine::Engine;

/// Errors that can occur when building a distribution
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DistributionError {
    #[error("Empty range: lo {lo} is greater than hi {hi}")]
    EmptyRange { lo: u64, hi: u64 },
}

/// Uniform distribution over the inclusive range `[lo, hi]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniformInt {
    lo: u64,
    hi: u64,
}

impl UniformInt {
    /// Create a distribution over `[lo, hi]`
    ///
    /// # Errors
    /// `DistributionError::EmptyRange` if `lo > hi`.
    pub fn new(lo: u64, hi: u64) -> Result<Self, DistributionError> {
        if lo > hi {
            return Err(DistributionError::EmptyRange { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    pub fn lo(&self) -> u64 {
        self.lo
    }

    pub fn hi(&self) -> u64 {
        self.hi
    }

    /// Draw one value in `[lo, hi]`
    pub fn sample<E: Engine + ?Sized>(&self, engine: &mut E) -> u64 {
        self.lo + sample_offset(engine, self.hi - self.lo)
    }
}

/// Uniform value in `[0, urange]`
fn sample_offset<E: Engine + ?Sized>(engine: &mut E, urange: u64) -> u64 {
    let emin: u64 = engine.min().into();
    let erange = engine.range();

    if erange == urange {
        let r: u64 = engine.next().into();
        return r - emin;
    }

    if erange > urange {
        // urange + 1 cannot overflow: urange < erange <= u64::MAX
        let buckets = urange + 1;
        let scaling = erange / buckets;
        let past = buckets * scaling;
        loop {
            let r: u64 = engine.next().into();
            if r - emin < past {
                return (r - emin) / scaling;
            }
        }
    }

    // erange < urange, so erange + 1 cannot overflow
    let step = erange + 1;
    loop {
        let high = step * sample_offset(engine, urange / step);
        let low: u64 = engine.next().into();
        let low = low - emin;
        match high.checked_add(low) {
            Some(r) if r <= urange => return r,
            _ => continue,
        }
    }
}
