//! Fingerprinting many documents at once.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use super::hashing::FeatureHasher;
use super::types::Fingerprint;
use super::SimHasher;

/// Batch methods for [`SimHasher`].
impl<H: FeatureHasher> SimHasher<H> {
    /// Fingerprint every document, preserving input order.
    ///
    /// Documents are independent, so with the `parallel` feature they are
    /// spread across the rayon thread pool.
    pub fn fingerprint_batch<T>(&self, documents: &[T]) -> Vec<Fingerprint>
    where
        T: AsRef<str> + Sync,
    {
        let start_time = std::time::Instant::now();

        #[cfg(feature = "parallel")]
        let fingerprints: Vec<Fingerprint> = documents
            .par_iter()
            .map(|doc| self.fingerprint(doc.as_ref()))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let fingerprints: Vec<Fingerprint> = documents
            .iter()
            .map(|doc| self.fingerprint(doc.as_ref()))
            .collect();

        debug!(
            documents = documents.len(),
            "Batch SimHash computation took: {:?}",
            start_time.elapsed()
        );

        fingerprints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simhash::{SimHashConfig, Xxh3FeatureHasher};

    #[test]
    fn test_batch_matches_single_document() {
        let hasher = SimHasher::new(SimHashConfig::default());
        let docs = [
            "the cat sat on the mat",
            "",
            "the cat sat on the rug",
            "completely different text about something else",
        ];

        let batch = hasher.fingerprint_batch(&docs);
        let single: Vec<Fingerprint> = docs.iter().map(|d| hasher.fingerprint(d)).collect();
        assert_eq!(batch, single);
        assert!(batch[1].is_empty());
    }

    #[test]
    fn test_batch_accepts_owned_strings() {
        let hasher = SimHasher::with_hasher(
            SimHashConfig::default().with_ngram(3),
            Xxh3FeatureHasher::with_seed(11),
        );
        let docs: Vec<String> = vec!["abcdef".into(), "abcdeg".into()];
        let batch = hasher.fingerprint_batch(&docs);
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0], hasher.fingerprint("abcdef"));
    }

    #[test]
    fn test_empty_batch() {
        let hasher = SimHasher::new(SimHashConfig::default());
        let docs: [&str; 0] = [];
        assert!(hasher.fingerprint_batch(&docs).is_empty());
    }
}
