//! Per-feature 64-bit hashing.
//!
//! The aggregator only needs a deterministic, well-dispersed `bytes -> u64`
//! mapping, so the digest sits behind the [`FeatureHasher`] trait.

use sha2::{Digest, Sha256};
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Maps a feature value to a 64-bit hash.
///
/// Implementations must be pure: the same bytes always give the same hash,
/// across runs and processes.
pub trait FeatureHasher: Send + Sync {
    /// Hash the raw feature bytes.
    fn hash(&self, value: &[u8]) -> u64;
}

/// First eight bytes of the SHA-256 digest, read big-endian. The default hasher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256FeatureHasher;

impl FeatureHasher for Sha256FeatureHasher {
    fn hash(&self, value: &[u8]) -> u64 {
        let digest = Sha256::digest(value);
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        u64::from_be_bytes(prefix)
    }
}

/// Seeded xxHash3 (64-bit). Much faster than SHA-256, with fingerprints that
/// are not interchangeable with the default hasher's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Xxh3FeatureHasher {
    seed: u64,
}

impl Xxh3FeatureHasher {
    /// Create a hasher with a fixed seed.
    pub const fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Seed mixed into every hash.
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl FeatureHasher for Xxh3FeatureHasher {
    fn hash(&self, value: &[u8]) -> u64 {
        xxh3_64_with_seed(value, self.seed)
    }
}

impl<H: FeatureHasher + ?Sized> FeatureHasher for &H {
    fn hash(&self, value: &[u8]) -> u64 {
        (**self).hash(value)
    }
}
