//! Generator families
//!
//! Every engine here implements [`Engine`](crate::core::Engine). The
//! xoshiro/xoroshiro families are generic over a scrambler marker
//! ([`Plus`], [`PlusPlus`], [`StarStar`]) and exported under the usual names
//! (`Xoshiro256PlusPlus` and friends).
//!
//! None of these generators are cryptographically secure.

mod mt19937;
mod scaled;
mod scrambler;
mod well512;
mod xoroshiro128;
mod xoshiro256;
mod xoshiro512;

pub use mt19937::Mt19937;
pub use scaled::{LegacyRand, RangeError, ScaledRand, UniformSource};
pub use scrambler::{Plus, PlusPlus, StarStar};
pub use well512::Well512;
pub use xoroshiro128::{
    Xoroshiro128, Xoroshiro128Plus, Xoroshiro128PlusPlus, Xoroshiro128Scrambler,
    Xoroshiro128StarStar,
};
pub use xoshiro256::{
    Xoshiro256, Xoshiro256Plus, Xoshiro256PlusPlus, Xoshiro256Scrambler, Xoshiro256StarStar,
};
pub use xoshiro512::{
    Xoshiro512, Xoshiro512Plus, Xoshiro512PlusPlus, Xoshiro512Scrambler, Xoshiro512StarStar,
};
