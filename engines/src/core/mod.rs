//! Capability contract and seeding protocol shared by every engine

pub mod engine;
pub mod seed;

pub use engine::Engine;
pub use seed::{SeedSeq, SeedSource, Seedable, SplitMix64};
