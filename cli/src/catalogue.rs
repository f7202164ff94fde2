//! Engine catalogue
//!
//! Maps each demo engine name to a concrete generator, seeds it, and runs
//! the sampling driver over it. Engines are rendered one after another.

use prng_engines::{
    sample, Histogram, Mt19937, SamplingConfig, ScaledRand, SeedSeq, SeedSource, Seedable,
    SplitMix64, Well512, Xoroshiro128Plus, Xoroshiro128PlusPlus, Xoroshiro128StarStar,
    Xoshiro256Plus, Xoshiro256PlusPlus, Xoshiro256StarStar, Xoshiro512Plus, Xoshiro512PlusPlus,
    Xoshiro512StarStar,
};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::DemoError;

/// Every engine the demo knows, in rendering order
pub const ENGINE_NAMES: [&str; 14] = [
    "c_rand_max_100000",
    "c_rand_max_1000000",
    "c_rand_max_10000000",
    "mt19937",
    "well512",
    "xoshiro256p",
    "xoshiro256pp",
    "xoshiro256starstar",
    "xoshiro512p",
    "xoshiro512pp",
    "xoshiro512starstar",
    "xoroshiro128p",
    "xoroshiro128pp",
    "xoroshiro128starstar",
];

/// Where engine seeds come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seeding {
    /// Fresh OS entropy for every engine
    Entropy,

    /// Fixed u64 expanded through SplitMix64
    Fixed(u64),
}

impl Seeding {
    /// Single 32-bit seed, for engines seeded like `srand`
    fn word(&self) -> Result<u32, DemoError> {
        match self {
            Seeding::Entropy => Ok(os_words(1)?[0]),
            Seeding::Fixed(seed) => {
                let mut word = [0u32; 1];
                SplitMix64::new(*seed).fill(&mut word[..]);
                Ok(word[0])
            }
        }
    }

    /// Full-state seeding: STATE_SIZE entropy words mixed through SeedSeq
    fn engine<E>(&self) -> Result<E, DemoError>
    where
        E: Seedable,
        SeedSeq: SeedSource<E::Word>,
        SplitMix64: SeedSource<E::Word>,
    {
        match self {
            Seeding::Entropy => {
                let mut seq = SeedSeq::new(os_words(E::STATE_SIZE)?);
                Ok(E::from_seed_source(&mut seq))
            }
            Seeding::Fixed(seed) => Ok(E::seed_from_u64(*seed)),
        }
    }
}

/// `count` 32-bit words from the operating system
fn os_words(count: usize) -> Result<Vec<u32>, DemoError> {
    let mut bytes = vec![0u8; count * 4];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(bytes
        .chunks_exact(4)
        .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

/// Check that every requested name is in the catalogue
///
/// An empty selection means every engine.
pub fn select(only: &[String]) -> Result<Vec<&'static str>, DemoError> {
    if only.is_empty() {
        return Ok(ENGINE_NAMES.to_vec());
    }

    only.iter()
        .map(|name| {
            ENGINE_NAMES
                .iter()
                .copied()
                .find(|known| *known == name.as_str())
                .ok_or_else(|| DemoError::UnknownEngine(name.clone()))
        })
        .collect()
}

/// Seed the named engine and sample it
pub fn sample_engine(
    name: &str,
    seeding: &Seeding,
    config: &SamplingConfig,
) -> Result<Histogram, DemoError> {
    let histogram = match name {
        "c_rand_max_100000" => sample(&mut ScaledRand::new(100_000, seeding.word()?)?, config)?,
        "c_rand_max_1000000" => {
            sample(&mut ScaledRand::new(1_000_000, seeding.word()?)?, config)?
        }
        "c_rand_max_10000000" => {
            sample(&mut ScaledRand::new(10_000_000, seeding.word()?)?, config)?
        }
        "mt19937" => sample(&mut Mt19937::new(seeding.word()?), config)?,
        "well512" => sample(&mut seeding.engine::<Well512>()?, config)?,
        "xoshiro256p" => sample(&mut seeding.engine::<Xoshiro256Plus>()?, config)?,
        "xoshiro256pp" => sample(&mut seeding.engine::<Xoshiro256PlusPlus>()?, config)?,
        "xoshiro256starstar" => sample(&mut seeding.engine::<Xoshiro256StarStar>()?, config)?,
        "xoshiro512p" => sample(&mut seeding.engine::<Xoshiro512Plus>()?, config)?,
        "xoshiro512pp" => sample(&mut seeding.engine::<Xoshiro512PlusPlus>()?, config)?,
        "xoshiro512starstar" => sample(&mut seeding.engine::<Xoshiro512StarStar>()?, config)?,
        "xoroshiro128p" => sample(&mut seeding.engine::<Xoroshiro128Plus>()?, config)?,
        "xoroshiro128pp" => sample(&mut seeding.engine::<Xoroshiro128PlusPlus>()?, config)?,
        "xoroshiro128starstar" => {
            sample(&mut seeding.engine::<Xoroshiro128StarStar>()?, config)?
        }
        _ => return Err(DemoError::UnknownEngine(name.to_string())),
    };

    Ok(histogram)
}
