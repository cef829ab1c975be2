//! Seeded randomness for drawing factors and braids.

use std::hash::Hasher;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use siphasher::sip::SipHasher13;

/// Seeded generator used to draw random simple factors and braids.
///
/// A stream is named by a master seed and a path of ids, typically
/// `[strands, sample]`. Its seed is the SipHash-1-3 (zero keys) of the master
/// seed followed by the path, so any single sample of a batch can be
/// regenerated without replaying the others.
#[derive(Debug, Clone)]
pub struct RngHandle {
    seed: u64,
    rng: StdRng,
}

impl RngHandle {
    /// Generator seeded directly with `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator of the stream `[substream]` under `master_seed`.
    pub fn substream(master_seed: u64, substream: u64) -> Self {
        Self::from_seed(derive_substream_seed(master_seed, substream))
    }

    /// Generator of the stream named by `path` under `master_seed`.
    pub fn stream(master_seed: u64, path: &[u64]) -> Self {
        Self::from_seed(derive_stream_seed(master_seed, path))
    }

    /// Seed the generator was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Underlying generator.
    pub fn inner_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

/// Seed of the stream named by `path` under `master_seed`.
pub fn derive_stream_seed(master_seed: u64, path: &[u64]) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write_u64(master_seed);
    for id in path {
        hasher.write_u64(*id);
    }
    hasher.finish()
}

/// Seed of the one-level stream `[substream]`.
pub fn derive_substream_seed(master_seed: u64, substream: u64) -> u64 {
    derive_stream_seed(master_seed, &[substream])
}
