//! Seeding protocol
//!
//! Engines are filled from a [`SeedSource`] that yields words of the
//! engine's native width (u32 for WELL512 and MT19937, u64 for the
//! xoshiro/xoroshiro families). The engine copies those words into its
//! state verbatim: no whitening happens on the engine side.
//!
//! Two sources are provided:
//!
//! - [`SeedSeq`]: the standard seed-sequence mixer (same output as C++
//!   `std::seed_seq::generate`) over a list of 32-bit entropy words
//! - [`SplitMix64`]: expands a single u64 into as many words as needed,
//!   the seeding recommended by the xoshiro authors
//!
//! # All-zero states
//!
//! The xor-shift based engines freeze if their state is all zero. That is a
//! precondition on the seed material and is NOT checked at construction.

/// Supplier of seed words of width `W`
pub trait SeedSource<W> {
    /// Overwrite every element of `words` with fresh seed material
    fn fill(&mut self, words: &mut [W]);
}

impl<W, S: SeedSource<W> + ?Sized> SeedSource<W> for &mut S {
    fn fill(&mut self, words: &mut [W]) {
        (**self).fill(words)
    }
}

/// Engines whose whole state can be populated from a seed source
///
/// # Example
/// ```
/// use prng_engines::{Engine, Seedable, SplitMix64, Xoshiro256PlusPlus};
///
/// let mut a = Xoshiro256PlusPlus::from_seed_source(&mut SplitMix64::new(7));
/// let mut b = Xoshiro256PlusPlus::from_seed_source(&mut SplitMix64::new(7));
/// assert_eq!(a.next(), b.next());
/// ```
pub trait Seedable: Sized {
    /// Native state word
    type Word: Copy;

    /// Number of words in the engine state
    const STATE_SIZE: usize;

    /// Build an engine whose state is exactly `STATE_SIZE` words drawn from `source`
    fn from_seed_source<S: SeedSource<Self::Word> + ?Sized>(source: &mut S) -> Self;

    /// Build an engine from a single u64 expanded through SplitMix64
    fn seed_from_u64(seed: u64) -> Self
    where
        SplitMix64: SeedSource<Self::Word>,
    {
        Self::from_seed_source(&mut SplitMix64::new(seed))
    }
}

// ============================================================================
// SeedSeq
// ============================================================================

/// Standard seed-sequence mixer
///
/// Stores the entropy words it was built from and, on every `fill`, mixes
/// them into the requested number of output words. Filling the same length
/// twice yields the same words.
///
/// # Example
/// ```
/// use prng_engines::SeedSeq;
///
/// let seq = SeedSeq::new([1, 2, 3]);
/// let mut out = [0u32; 2];
/// seq.generate(&mut out);
/// assert_eq!(out, [2039731893, 260350100]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedSeq {
    entropy: Vec<u32>,
}

impl SeedSeq {
    /// Create a seed sequence over the given entropy words
    pub fn new(entropy: impl IntoIterator<Item = u32>) -> Self {
        Self {
            entropy: entropy.into_iter().collect(),
        }
    }

    /// Number of stored entropy words
    pub fn len(&self) -> usize {
        self.entropy.len()
    }

    /// True when no entropy words were supplied
    pub fn is_empty(&self) -> bool {
        self.entropy.is_empty()
    }

    /// Mix the stored entropy into `out`
    pub fn generate(&self, out: &mut [u32]) {
        let n = out.len();
        if n == 0 {
            return;
        }

        fn tangle(x: u32) -> u32 {
            x ^ (x >> 27)
        }

        out.fill(0x8b8b_8b8b);

        let s = self.entropy.len();
        let t = if n >= 623 {
            11
        } else if n >= 68 {
            7
        } else if n >= 39 {
            5
        } else if n >= 7 {
            3
        } else {
            (n - 1) / 2
        };
        let p = (n - t) / 2;
        let q = p + t;
        let m = (s + 1).max(n);

        for k in 0..m {
            let r1 = 1_664_525u32
                .wrapping_mul(tangle(out[k % n] ^ out[(k + p) % n] ^ out[(k + n - 1) % n]));
            let r2 = match k {
                0 => r1.wrapping_add(s as u32),
                _ if k <= s => r1
                    .wrapping_add((k % n) as u32)
                    .wrapping_add(self.entropy[k - 1]),
                _ => r1.wrapping_add((k % n) as u32),
            };
            out[(k + p) % n] = out[(k + p) % n].wrapping_add(r1);
            out[(k + q) % n] = out[(k + q) % n].wrapping_add(r2);
            out[k % n] = r2;
        }

        for k in m..m + n {
            let r3 = 1_566_083_941u32.wrapping_mul(tangle(
                out[k % n]
                    .wrapping_add(out[(k + p) % n])
                    .wrapping_add(out[(k + n - 1) % n]),
            ));
            let r4 = r3.wrapping_sub((k % n) as u32);
            out[(k + p) % n] ^= r3;
            out[(k + q) % n] ^= r4;
            out[k % n] = r4;
        }
    }
}

impl SeedSource<u32> for SeedSeq {
    fn fill(&mut self, words: &mut [u32]) {
        self.generate(words);
    }
}

impl SeedSource<u64> for SeedSeq {
    /// Generates two 32-bit words per target word, packed low then high
    fn fill(&mut self, words: &mut [u64]) {
        let mut halves = vec![0u32; words.len() * 2];
        self.generate(&mut halves);
        for (word, pair) in words.iter_mut().zip(halves.chunks_exact(2)) {
            *word = u64::from(pair[0]) | (u64::from(pair[1]) << 32);
        }
    }
}

// ============================================================================
// SplitMix64
// ============================================================================

/// SplitMix64 expander
///
/// A 64-bit counter stepped by the golden-ratio increment and passed through
/// a fixed finalizer. Used to turn one u64 into a full engine state.
///
/// # Example
/// ```
/// use prng_engines::SplitMix64;
///
/// let mut sm = SplitMix64::new(0);
/// assert_eq!(sm.next_u64(), 0xe220a8397b1dcdaf);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

impl SeedSource<u64> for SplitMix64 {
    fn fill(&mut self, words: &mut [u64]) {
        for word in words {
            *word = self.next_u64();
        }
    }
}

impl SeedSource<u32> for SplitMix64 {
    /// Upper half of each output
    fn fill(&mut self, words: &mut [u32]) {
        for word in words {
            *word = (self.next_u64() >> 32) as u32;
        }
    }
}
