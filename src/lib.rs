//! # rapid_textteaser
//!
//! Feature-based extractive summarization with Python bindings.
//!
//! Every sentence of a document is scored from five features (title overlap,
//! sentence length, position, and two keyword-density measures over the
//! document's most frequent terms). The best-scoring sentences are returned
//! in ranked order, each followed by a delimiter.
//!
//! ## Features
//!
//! - **Deterministic**: stable ranking and tie-broken keyword selection
//! - **Unicode-aware**: UAX #29 segmentation, whitespace tokenization for
//!   Russian and Chinese
//! - **Pluggable**: bring your own sentence splitter via [`Segmenter`]
//! - **Python bindings**: via PyO3 behind the `python` feature

pub mod errors;
pub mod features;
pub mod keywords;
pub mod nlp;
pub mod summarizer;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use errors::{Result, SummarizerError};
pub use types::{FeatureSet, PretokenizedDocument, Sentence, SummarizerConfig, DEFAULT_DELIMITER};

// Re-export main functionality
pub use features::{DocumentContext, FeatureExtractor, ScoreCombiner, ScoreWeights};
pub use keywords::{top_keywords, KeywordScoreTable, TermFrequencyTable};
pub use nlp::language::{Language, LanguageProfile, TokenizerStrategy};
pub use nlp::stopwords::StopwordTable;
pub use nlp::tokenizer::{Segmenter, Tokenizer};
pub use summarizer::{ScoredSentence, SentenceRanker, Summarizer, Summary, SummaryAssembler};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize `document` into at most `max_sentences` sentences.
///
/// Each selected sentence is followed by `delimiter` (default `" (...) "`),
/// the last one included. Unknown language codes fall back to English.
///
/// ```
/// let summary = rapid_textteaser::summarize(
///     "Cat",
///     "The cat sat on the mat. The cat is happy. Dogs bark loudly at night.",
///     2,
///     Some(" | "),
///     "en",
/// )
/// .unwrap();
/// assert!(summary.ends_with(" | "));
/// ```
pub fn summarize(
    title: &str,
    document: &str,
    max_sentences: usize,
    delimiter: Option<&str>,
    lang: &str,
) -> Result<String> {
    let config = SummarizerConfig::default()
        .with_language(lang)
        .with_max_sentences(max_sentences)
        .with_delimiter(delimiter.unwrap_or(DEFAULT_DELIMITER));

    Summarizer::new(config)?.summarize(title, document)
}

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Initialize the Python module
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    python::register_module(m)?;
    Ok(())
}
