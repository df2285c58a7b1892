//! Weighted bit voting: folding feature hashes into one fingerprint.

use super::features::Feature;
use super::hashing::FeatureHasher;
use super::types::{Fingerprint, FINGERPRINT_BITS};

const BITS: usize = FINGERPRINT_BITS as usize;

/// One signed vote counter per fingerprint bit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitVotes {
    counters: [i64; BITS],
}

impl Default for BitVotes {
    fn default() -> Self {
        Self {
            counters: [0; BITS],
        }
    }
}

impl BitVotes {
    /// Start with every counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `weight` to each counter whose bit is set in `hash`, subtract it otherwise.
    ///
    /// Counters saturate at the `i64` bounds instead of wrapping.
    pub fn vote(&mut self, hash: u64, weight: u64) {
        let weight = i64::try_from(weight).unwrap_or(i64::MAX);
        for (i, counter) in self.counters.iter_mut().enumerate() {
            if (hash >> i) & 1 == 1 {
                *counter = counter.saturating_add(weight);
            } else {
                *counter = counter.saturating_sub(weight);
            }
        }
    }

    /// Current counter values, bit 0 first.
    pub fn counters(&self) -> &[i64; BITS] {
        &self.counters
    }

    /// Set bit `i` iff counter `i` is strictly positive. Ties clear the bit.
    pub fn finish(&self) -> Fingerprint {
        let bits = self
            .counters
            .iter()
            .enumerate()
            .filter(|&(_, &counter)| counter > 0)
            .fold(0u64, |acc, (i, _)| acc | (1u64 << i));
        Fingerprint(bits)
    }
}

/// Hash every feature and fold the weighted votes into a fingerprint.
pub fn aggregate<H>(features: &[Feature<'_>], hasher: &H) -> Fingerprint
where
    H: FeatureHasher + ?Sized,
{
    let mut votes = BitVotes::new();
    for feature in features {
        votes.vote(hasher.hash(feature.value()), feature.weight());
    }
    votes.finish()
}
