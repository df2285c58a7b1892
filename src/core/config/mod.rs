//! Configuration types and management for simhash-rs.
//!
//! [`SimHashConfig`] is a plain value object: build it once (from defaults,
//! the `with_*` constructors or a YAML file), then hand it by reference to the
//! fingerprint computation. Nothing in the computation mutates it.

pub mod validation;

use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::core::errors::{Result, SimHashError};

pub use validation::{uppercase_entries, validate_non_empty_entries};

/// Tokens whose length is at or below this many characters are dropped in word mode.
pub const DEFAULT_MIN_TOKEN_LENGTH: usize = 2;

/// Window width used in n-gram mode when none (or zero) is configured.
pub const DEFAULT_NGRAM_WIDTH: usize = 4;

/// How features are extracted from a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FeatureMode {
    /// Lower-cased letter/digit tokens, filtered by stop words and minimum length
    #[default]
    Word,
    /// Raw byte windows of a fixed width, sliding by one
    Ngram {
        /// Window width in bytes; zero falls back to [`DEFAULT_NGRAM_WIDTH`]
        #[serde(default = "FeatureMode::default_ngram_width")]
        width: usize,
    },
}

impl FeatureMode {
    const fn default_ngram_width() -> usize {
        DEFAULT_NGRAM_WIDTH
    }

    /// The n-gram width actually used for extraction, or `None` in word mode.
    pub const fn effective_width(&self) -> Option<usize> {
        match *self {
            Self::Word => None,
            Self::Ngram { width: 0 } => Some(DEFAULT_NGRAM_WIDTH),
            Self::Ngram { width } => Some(width),
        }
    }

    /// Short name used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Word => "word",
            Self::Ngram { .. } => "ngram",
        }
    }
}

/// Options controlling feature extraction for a fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimHashConfig {
    /// Lower-case tokens to discard in word mode (exact match)
    #[serde(default)]
    pub stop_words: HashSet<String>,

    /// Tokens with at most this many characters are discarded in word mode
    #[serde(default = "SimHashConfig::default_min_token_length")]
    pub min_token_length: usize,

    /// Word tokenization or raw n-gram shingling
    #[serde(default)]
    pub mode: FeatureMode,
}

/// Default implementation for [`SimHashConfig`].
impl Default for SimHashConfig {
    /// Word mode, no stop words, minimum token length 2.
    fn default() -> Self {
        Self {
            stop_words: HashSet::new(),
            min_token_length: Self::default_min_token_length(),
            mode: FeatureMode::Word,
        }
    }
}

/// Construction, validation and I/O methods for [`SimHashConfig`].
impl SimHashConfig {
    const fn default_min_token_length() -> usize {
        DEFAULT_MIN_TOKEN_LENGTH
    }

    /// Replace the stop-word set.
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the minimum token length (tokens of this length or shorter are dropped).
    pub fn with_min_token_length(mut self, length: usize) -> Self {
        self.min_token_length = length;
        self
    }

    /// Switch to n-gram mode with the given width (zero means the default width).
    pub fn with_ngram(mut self, width: usize) -> Self {
        self.mode = FeatureMode::Ngram { width };
        self
    }

    /// Set the feature mode directly.
    pub fn with_mode(mut self, mode: FeatureMode) -> Self {
        self.mode = mode;
        self
    }

    /// Whether `token` (already lower-cased) is a configured stop word.
    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    /// Validate the configuration.
    ///
    /// The fingerprint computation accepts any configuration; this only
    /// catches entries that are almost certainly mistakes.
    pub fn validate(&self) -> Result<()> {
        validate_non_empty_entries(&self.stop_words, "stop_words")?;

        let unmatchable = uppercase_entries(&self.stop_words);
        if !unmatchable.is_empty() {
            warn!(
                stop_words = ?unmatchable,
                "Stop words containing upper-case characters never match lower-cased tokens"
            );
        }

        Ok(())
    }

    /// Parse and validate a configuration from a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            SimHashError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        let config = Self::from_yaml_str(&content)
            .map_err(|e| e.with_context(path.display().to_string()))?;
        info!(
            path = %path.display(),
            mode = config.mode.name(),
            "Loaded simhash configuration"
        );
        Ok(config)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            SimHashError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })?;
        info!(path = %path.display(), "Saved simhash configuration");
        Ok(())
    }
}
