//! Feature extraction: turning a document into a weighted, deduplicated bag of features.
//!
//! Word mode lower-cases tokens and applies stop-word and minimum-length
//! filters. N-gram mode shingles the raw bytes of the text with no
//! normalisation at all.

use std::borrow::Cow;

use indexmap::IndexMap;

use super::tokenizer::tokenize;
use crate::core::config::{FeatureMode, SimHashConfig, DEFAULT_NGRAM_WIDTH};

/// A distinct token or n-gram and the number of times it occurs in a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feature<'a> {
    value: Cow<'a, [u8]>,
    weight: u64,
}

impl<'a> Feature<'a> {
    /// Create a feature from its raw value and occurrence count.
    pub fn new(value: impl Into<Cow<'a, [u8]>>, weight: u64) -> Self {
        Self {
            value: value.into(),
            weight,
        }
    }

    /// Raw bytes that get hashed.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Value as text. N-gram windows can split a multi-byte character, in
    /// which case the broken bytes are replaced.
    pub fn value_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.value)
    }

    /// Occurrence count within the document (always at least 1 when extracted).
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Detach the feature from the text it was extracted from.
    pub fn into_owned(self) -> Feature<'static> {
        Feature {
            value: Cow::Owned(self.value.into_owned()),
            weight: self.weight,
        }
    }
}

/// Extract features from `text` according to the configured mode.
///
/// Features come back in order of first occurrence; each distinct value
/// appears exactly once, carrying its total count as weight.
pub fn extract_features<'a>(text: &'a str, config: &SimHashConfig) -> Vec<Feature<'a>> {
    match config.mode {
        FeatureMode::Word => extract_words(text, config),
        FeatureMode::Ngram { .. } => {
            let width = config.mode.effective_width().unwrap_or(DEFAULT_NGRAM_WIDTH);
            extract_ngrams(text, width)
        }
    }
}

/// Lower-cased tokens longer than `min_token_length` characters that are not stop words.
fn extract_words(text: &str, config: &SimHashConfig) -> Vec<Feature<'static>> {
    let mut counts: IndexMap<String, u64> = IndexMap::new();

    for token in tokenize(text) {
        let token = token.to_lowercase();
        if config.is_stop_word(&token) || token.chars().count() <= config.min_token_length {
            continue;
        }
        let count = counts.entry(token).or_insert(0);
        *count = count.saturating_add(1);
    }

    counts
        .into_iter()
        .map(|(token, count)| Feature::new(token.into_bytes(), count))
        .collect()
}

/// Every `width`-byte window of the raw text, stepping by one byte.
fn extract_ngrams(text: &str, width: usize) -> Vec<Feature<'_>> {
    let mut counts: IndexMap<&[u8], u64> = IndexMap::new();

    // `width` is already resolved to a non-zero value; `windows` yields
    // nothing when the text is shorter than it
    for window in text.as_bytes().windows(width) {
        let count = counts.entry(window).or_insert(0);
        *count = count.saturating_add(1);
    }

    counts
        .into_iter()
        .map(|(window, count)| Feature::new(window, count))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_pairs(features: &[Feature<'_>]) -> Vec<(String, u64)> {
        features
            .iter()
            .map(|f| (f.value_lossy().into_owned(), f.weight()))
            .collect()
    }

    #[test]
    fn test_word_features_are_counted_and_lowercased() {
        let config = SimHashConfig::default();
        let features = extract_features("The cat saw THE other cat", &config);
        assert_eq!(
            as_pairs(&features),
            vec![
                ("the".to_string(), 2),
                ("cat".to_string(), 2),
                ("saw".to_string(), 1),
                ("other".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_min_token_length_is_strict() {
        let config = SimHashConfig::default();
        let features = extract_features("a an the", &config);
        assert_eq!(as_pairs(&features), vec![("the".to_string(), 1)]);

        let config = SimHashConfig::default().with_min_token_length(3);
        assert!(extract_features("a an the", &config).is_empty());

        let config = SimHashConfig::default().with_min_token_length(0);
        assert_eq!(extract_features("a an the", &config).len(), 3);
    }

    #[test]
    fn test_min_token_length_counts_characters() {
        let config = SimHashConfig::default();
        // "éé" is four bytes but only two characters
        assert!(extract_features("éé", &config).is_empty());
        assert_eq!(extract_features("ééé", &config).len(), 1);
    }

    #[test]
    fn test_stop_words_match_lowercased_tokens() {
        let config = SimHashConfig::default().with_stop_words(["the", "on"]);
        let features = extract_features("The cat sat ON the mat", &config);
        assert_eq!(
            as_pairs(&features),
            vec![
                ("cat".to_string(), 1),
                ("sat".to_string(), 1),
                ("mat".to_string(), 1),
            ]
        );

        let config = SimHashConfig::default().with_stop_words(["The"]);
        assert_eq!(extract_features("The cat", &config).len(), 2);
    }

    #[test]
    fn test_ngrams_use_raw_text() {
        let config = SimHashConfig::default().with_ngram(3);
        let features = extract_features("AbAbA", &config);
        assert_eq!(
            as_pairs(&features),
            vec![
                ("AbA".to_string(), 2),
                ("bAb".to_string(), 1),
            ]
        );

        // Punctuation and whitespace are part of the shingles
        let features = extract_features("a, b", &config);
        assert_eq!(
            as_pairs(&features),
            vec![("a, ".to_string(), 1), (", b".to_string(), 1)]
        );
    }

    #[test]
    fn test_ngram_mode_ignores_word_filters() {
        let config = SimHashConfig::default()
            .with_stop_words(["the"])
            .with_min_token_length(10)
            .with_ngram(3);
        let features = extract_features("the", &config);
        assert_eq!(as_pairs(&features), vec![("the".to_string(), 1)]);
    }

    #[test]
    fn test_ngram_width_boundaries() {
        let config = SimHashConfig::default().with_ngram(4);
        assert!(extract_features("abc", &config).is_empty());
        assert_eq!(extract_features("abcd", &config).len(), 1);
        assert_eq!(extract_features("abcdef", &config).len(), 3);
        assert!(extract_features("", &config).is_empty());
    }

    #[test]
    fn test_zero_ngram_width_uses_default() {
        let zero = SimHashConfig::default().with_ngram(0);
        let four = SimHashConfig::default().with_ngram(4);
        assert_eq!(
            extract_features("hello world", &zero),
            extract_features("hello world", &four)
        );
    }

    #[test]
    fn test_ngrams_are_byte_windows() {
        let config = SimHashConfig::default().with_ngram(2);
        let features = extract_features("é", &config);
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].value(), "é".as_bytes());

        // Windows may split a multi-byte character without panicking
        let features = extract_features("aé", &config);
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].value(), &[b'a', 0xC3]);
    }

    #[test]
    fn test_into_owned_keeps_value_and_weight() {
        let text = String::from("abab");
        let config = SimHashConfig::default().with_ngram(2);
        let owned: Vec<Feature<'static>> = extract_features(&text, &config)
            .into_iter()
            .map(Feature::into_owned)
            .collect();
        drop(text);
        assert_eq!(owned[0], Feature::new(b"ab".to_vec(), 2));
    }
}
