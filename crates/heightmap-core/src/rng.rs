//! Deterministic RNG wrapper using PCG32.
//!
//! Permutation tables are built from an explicit `DeterministicRng` rather
//! than a process-wide generator, so a fixed seed always yields the same
//! table and therefore the same heightmap.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Wrapper around PCG32 for deterministic random number generation.
#[derive(Clone)]
pub struct DeterministicRng {
    inner: Pcg32,
}

impl DeterministicRng {
    /// Create a new RNG from a 32-bit seed.
    ///
    /// The seed is expanded to 64 bits by duplicating the bits.
    pub fn new(seed: u32) -> Self {
        let seed64 = (seed as u64) | ((seed as u64) << 32);
        Self {
            inner: Pcg32::seed_from_u64(seed64),
        }
    }

    /// Derive a seed from the sub-second part of the system clock.
    ///
    /// Callers that want a fresh heightmap per run use this and report the
    /// value so the run can be reproduced with an explicit seed.
    pub fn seed_from_clock() -> u32 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
            .unwrap_or(0)
    }

    /// Generate a random u8 in the full range [0, 255].
    #[inline]
    pub fn gen_u8(&mut self) -> u8 {
        self.inner.gen::<u8>()
    }

    /// Generate a random value in the given range.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.inner.gen_range(range)
    }
}
