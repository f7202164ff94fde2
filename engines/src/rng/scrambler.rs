//! Output scrambler markers
//!
//! Zero-sized types selecting the output function of a xoshiro/xoroshiro
//! engine. Each family implements its own scrambler trait for them, so the
//! constants stay next to the state transition they belong to.

/// "+" scrambler: sum of two state words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Plus;

/// "++" scrambler: rotated sum plus a state word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PlusPlus;

/// "**" scrambler: multiply, rotate, multiply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StarStar;

/// Shared "**" output: `rotl(x * 5, 7) * 9`
#[inline]
pub(crate) fn star_star(x: u64) -> u64 {
    x.wrapping_mul(5).rotate_left(7).wrapping_mul(9)
}
