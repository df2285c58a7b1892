//! The 64-bit SimHash fingerprint type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::comparison::hamming_distance;

/// Number of bits in a fingerprint.
pub const FINGERPRINT_BITS: u32 = u64::BITS;

/// A 64-bit SimHash fingerprint. Bit 0 is the least significant bit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(pub u64);

impl Fingerprint {
    /// The fingerprint of a document with no features.
    pub const EMPTY: Self = Self(0);

    /// Raw bit pattern.
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// True when no bit is set, as for documents without features.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Hamming distance between two fingerprints (XOR + popcount).
    pub fn hamming_distance(&self, other: &Self) -> u32 {
        hamming_distance(self.0, other.0)
    }

    /// Whether the fingerprints differ in at most `k` bits.
    pub fn is_similar(&self, other: &Self, k: u32) -> bool {
        self.hamming_distance(other) <= k
    }

    /// Fraction of matching bits, from 0.0 (complementary) to 1.0 (identical).
    pub fn similarity(&self, other: &Self) -> f64 {
        1.0 - f64::from(self.hamming_distance(other)) / f64::from(FINGERPRINT_BITS)
    }
}

impl From<u64> for Fingerprint {
    fn from(bits: u64) -> Self {
        Self(bits)
    }
}

impl From<Fingerprint> for u64 {
    fn from(fingerprint: Fingerprint) -> Self {
        fingerprint.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

impl fmt::LowerHex for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
