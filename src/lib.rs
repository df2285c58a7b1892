//! # simhash-rs: SimHash Fingerprints for Near-Duplicate Text
//!
//! Computes fixed-width (64-bit) locality-sensitive fingerprints for text
//! documents. Near-duplicate documents produce fingerprints with a small
//! Hamming distance; unrelated documents differ in roughly half their bits.
//!
//! - **Feature extraction**: word tokens (lower-cased, stop-word and
//!   minimum-length filtered) or raw character n-grams, weighted by count
//! - **Feature hashing**: SHA-256 prefix by default, xxHash3 optional
//! - **Aggregation**: weighted bit voting into one `u64`
//! - **Comparison**: Hamming distance and thresholded similarity
//!
//! ## Architecture
//!
//! ```text
//! text ─▶ tokenizer ─▶ features ─▶ hashing ─▶ aggregator ─▶ Fingerprint
//!          (word mode)  (word | ngram)  (per feature)  (bit votes)
//!
//! Fingerprint × Fingerprint ─▶ comparison ─▶ distance / bool
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use simhash_rs::{are_similar, compute_fingerprint, SimHashConfig};
//!
//! let config = SimHashConfig::default().with_stop_words(["the", "on"]);
//! let a = compute_fingerprint("The cat sat on the mat", &config);
//! let b = compute_fingerprint("the cat sat on the mat!", &config);
//! assert_eq!(a, b);
//!
//! assert!(are_similar("hello world", "Hello, world!", 0));
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Configuration and error handling
pub mod core {
    //! Configuration and error types shared by the fingerprint pipeline.

    pub mod config;
    pub mod errors;
}

// Fingerprint computation and comparison
pub mod simhash;

// Re-export primary types for convenience
pub use crate::core::config::{FeatureMode, SimHashConfig};
pub use crate::core::errors::{Result, SimHashError};
pub use simhash::{
    are_similar, compute_fingerprint, extract_features, fingerprint_with, hamming_distance,
    is_token_char, tokenize, Feature, FeatureHasher, Fingerprint, Sha256FeatureHasher,
    SimHasher, Xxh3FeatureHasher,
};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build-time feature detection
pub mod features {
    //! Runtime feature detection.

    /// Check if parallel batch fingerprinting is enabled
    pub const fn has_parallel() -> bool {
        cfg!(feature = "parallel")
    }
}
