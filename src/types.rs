//! Core types for rapid_textteaser
//!
//! This module defines the fundamental data structures used throughout the
//! library: sentences, per-sentence feature sets and configuration.

use crate::errors::{Result, SummarizerError};
use crate::features::combiner::ScoreWeights;
use serde::{Deserialize, Serialize};

/// Delimiter placed after every selected sentence when none is supplied
pub const DEFAULT_DELIMITER: &str = " (...) ";

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, as rendered in the summary
    pub text: String,
    /// Sentence index within the document
    pub index: usize,
    /// Raw tokens as produced by the segmenter (punctuation and stopwords
    /// included)
    #[serde(default)]
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, index: usize, tokens: Vec<String>) -> Self {
        Self {
            text: text.into(),
            index,
            tokens,
        }
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

// ============================================================================
// Feature Set
// ============================================================================

/// The computed features of one sentence and its combined score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureSet {
    /// Overlap with the title words
    pub title: f64,
    /// Closeness to the ideal sentence length
    pub length: f64,
    /// Positional prior of the sentence within the document
    pub position: f64,
    /// Summation-based selection: mean keyword salience
    pub sbs: f64,
    /// Density-based selection: salience of nearby keyword pairs
    pub dbs: f64,
    /// `(sbs + dbs) / 2 * 10`
    pub keyword_frequency: f64,
    /// Final weighted score used for ranking
    pub score: f64,
}

// ============================================================================
// Pre-tokenized input
// ============================================================================

/// A document that has already been segmented by an external NLP front end.
///
/// `sentences[i].tokens` are the raw tokens used for term counting; the
/// optional `words` lists carry the stopword-free feature tokens. When
/// `words` is absent, the summarizer derives them with its own tokenizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PretokenizedDocument {
    #[serde(default)]
    pub title: String,
    pub sentences: Vec<Sentence>,
    #[serde(default)]
    pub title_words: Option<Vec<String>>,
    #[serde(default)]
    pub words: Option<Vec<Vec<String>>>,
}

impl PretokenizedDocument {
    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for summarization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Language code (e.g., "en", "fr", "zh-cn"); unknown codes use English
    pub language: String,
    /// Maximum number of sentences in the summary
    pub max_sentences: usize,
    /// String appended after every selected sentence
    pub delimiter: String,
    /// Number of most frequent terms used as the keyword vocabulary
    pub top_k: usize,
    /// Reference sentence length in tokens
    pub ideal_length: f64,
    /// Feature weights
    pub weights: ScoreWeights,
    /// Additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
    /// Sentence count from which feature extraction runs on the rayon pool
    pub parallel_threshold: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            max_sentences: 3,
            delimiter: DEFAULT_DELIMITER.to_string(),
            top_k: 10,
            ideal_length: 20.0,
            weights: ScoreWeights::default(),
            stopwords: Vec::new(),
            parallel_threshold: 256,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(SummarizerError::invalid_config("top_k must be > 0"));
        }

        if !self.ideal_length.is_finite() || self.ideal_length <= 0.0 {
            return Err(SummarizerError::invalid_config(format!(
                "ideal_length must be a positive number, got {}",
                self.ideal_length
            )));
        }

        self.weights.validate()
    }

    /// Builder method: set language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: set maximum number of sentences
    pub fn with_max_sentences(mut self, max_sentences: usize) -> Self {
        self.max_sentences = max_sentences;
        self
    }

    /// Builder method: set delimiter
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Builder method: set keyword vocabulary size
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Builder method: set ideal sentence length
    pub fn with_ideal_length(mut self, ideal_length: f64) -> Self {
        self.ideal_length = ideal_length;
        self
    }

    /// Builder method: set feature weights
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Builder method: add stopwords
    pub fn with_stopwords(mut self, stopwords: Vec<String>) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Builder method: set parallel threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
