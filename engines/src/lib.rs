//! PRNG Engines - Rust Core
//!
//! A family of deterministic pseudo-random number generators behind one
//! capability contract, plus the glue that samples and renders them.
//!
//! # Architecture
//!
//! - **core**: Capability contract (`Engine`) and seeding protocol
//! - **rng**: Generator families (ScaledRand, WELL512, xoshiro/xoroshiro, MT19937)
//! - **distribution**: Uniform integer adapter over any engine
//! - **sampling**: Histogram driver (draw N values, bin per grid cell)
//! - **render**: Heatmap image and BMP encoder
//!
//! # Critical Invariants
//!
//! 1. `next` is a pure state transition: same state → same (output, next state)
//! 2. Output is computed from the pre-advance state
//! 3. xor-based states must never be all-zero (precondition, not checked)
//!
//! None of these generators are suitable for cryptographic use.

// Module declarations
pub mod core;
pub mod distribution;
pub mod render;
pub mod rng;
pub mod sampling;

// Re-exports for convenience
pub use crate::core::engine::Engine;
pub use crate::core::seed::{SeedSeq, SeedSource, Seedable, SplitMix64};
pub use distribution::{DistributionError, UniformInt};
pub use render::{render_heatmap, Image, RenderError};
pub use rng::{
    LegacyRand, Mt19937, Plus, PlusPlus, RangeError, ScaledRand, StarStar, UniformSource,
    Well512, Xoroshiro128, Xoroshiro128Plus, Xoroshiro128PlusPlus, Xoroshiro128StarStar,
    Xoshiro256, Xoshiro256Plus, Xoshiro256PlusPlus, Xoshiro256StarStar, Xoshiro512,
    Xoshiro512Plus, Xoshiro512PlusPlus, Xoshiro512StarStar,
};
pub use sampling::{sample, Histogram, HistogramSummary, SamplingConfig, SamplingError};
