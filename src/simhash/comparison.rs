//! Fingerprint comparison.

use super::{compute_fingerprint, SimHashConfig};

/// Number of differing bits between two fingerprints, in `0..=64`.
pub fn hamming_distance(a: u64, b: u64) -> u32 {
    (a ^ b).count_ones()
}

/// Fingerprint both texts with the default configuration and report whether
/// they differ in at most `k` bits.
pub fn are_similar(text1: &str, text2: &str, k: u32) -> bool {
    let config = SimHashConfig::default();
    let fp1 = compute_fingerprint(text1, &config);
    let fp2 = compute_fingerprint(text2, &config);

    fp1.hamming_distance(&fp2) <= k
}
