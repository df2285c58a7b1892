//! SimHash fingerprinting of text documents.
//!
//! The pipeline is: text -> [`tokenize`] (word mode) -> [`extract_features`]
//! -> per-feature [`FeatureHasher`] -> weighted bit voting ([`aggregate`])
//! -> [`Fingerprint`]. Near-duplicate documents end up a small Hamming
//! distance apart; unrelated ones differ in roughly half their bits.

pub mod aggregator;
pub mod batch;
pub mod comparison;
pub mod features;
pub mod hashing;
pub mod tokenizer;
pub mod types;

pub use aggregator::{aggregate, BitVotes};
pub use comparison::{are_similar, hamming_distance};
pub use features::{extract_features, Feature};
pub use hashing::{FeatureHasher, Sha256FeatureHasher, Xxh3FeatureHasher};
pub use tokenizer::{is_token_char, tokenize};
pub use types::{Fingerprint, FINGERPRINT_BITS};

pub use crate::core::config::{FeatureMode, SimHashConfig};

use std::time::Instant;

use tracing::debug;

/// Fingerprint `text` with the default SHA-256 feature hasher.
///
/// Pure and total: every input yields a fingerprint, and texts without
/// any surviving feature yield [`Fingerprint::EMPTY`].
pub fn compute_fingerprint(text: &str, config: &SimHashConfig) -> Fingerprint {
    fingerprint_with(text, config, &Sha256FeatureHasher)
}

/// Fingerprint `text` using an explicit feature hasher.
pub fn fingerprint_with<H>(text: &str, config: &SimHashConfig, hasher: &H) -> Fingerprint
where
    H: FeatureHasher + ?Sized,
{
    let start_time = Instant::now();
    let features = extract_features(text, config);
    let fingerprint = aggregate(&features, hasher);

    debug!(
        mode = config.mode.name(),
        features = features.len(),
        fingerprint = %fingerprint,
        "SimHash computation took: {:?}",
        start_time.elapsed()
    );

    fingerprint
}

/// A configuration bound to a feature hasher, reusable across documents.
#[derive(Debug, Clone, Default)]
pub struct SimHasher<H = Sha256FeatureHasher> {
    config: SimHashConfig,
    hasher: H,
}

impl SimHasher<Sha256FeatureHasher> {
    /// Create a hasher using SHA-256 feature hashes.
    pub fn new(config: SimHashConfig) -> Self {
        Self {
            config,
            hasher: Sha256FeatureHasher,
        }
    }
}

impl<H: FeatureHasher> SimHasher<H> {
    /// Create a hasher with a custom feature hasher.
    pub fn with_hasher(config: SimHashConfig, hasher: H) -> Self {
        Self { config, hasher }
    }

    /// The extraction options in use.
    pub fn config(&self) -> &SimHashConfig {
        &self.config
    }

    /// The feature hasher in use.
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Features this hasher would vote with for `text`.
    pub fn features<'a>(&self, text: &'a str) -> Vec<Feature<'a>> {
        extract_features(text, &self.config)
    }

    /// Fingerprint a single document.
    pub fn fingerprint(&self, text: &str) -> Fingerprint {
        fingerprint_with(text, &self.config, &self.hasher)
    }

    /// Fingerprint two documents and compare them.
    pub fn distance(&self, text1: &str, text2: &str) -> u32 {
        self.fingerprint(text1)
            .hamming_distance(&self.fingerprint(text2))
    }
}
