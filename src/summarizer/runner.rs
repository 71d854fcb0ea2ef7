//! Summarizer runner: orchestrates the scoring stages for one document.
//!
//! Stages, in order:
//!
//! 1. segmentation (via a [`Segmenter`])
//! 2. term frequencies over the raw tokens
//! 3. top-K keyword salience
//! 4. per-sentence features, combined into a score (sequential, or on the
//!    rayon pool for large documents)
//! 5. ranking and assembly
//!
//! The frequency and keyword tables are built once and only borrowed by the
//! later stages.

use super::assembler::{Summary, SummaryAssembler};
use super::ranker::{ScoredSentence, SentenceRanker};
use crate::errors::{Result, SummarizerError};
use crate::features::{DocumentContext, FeatureExtractor, ScoreCombiner};
use crate::keywords::{top_keywords, TermFrequencyTable};
use crate::nlp::language::LanguageProfile;
use crate::nlp::tokenizer::{Segmenter, Tokenizer};
use crate::types::{PretokenizedDocument, Sentence, SummarizerConfig};
use rayon::prelude::*;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for a summarizer stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarizer_stage", stage = $name).entered();
    };
}

/// Feature-based extractive summarizer.
///
/// Generic over the NLP front end; [`Summarizer::new`] uses the built-in
/// [`Tokenizer`] for the configured language.
#[derive(Debug, Clone)]
pub struct Summarizer<S = Tokenizer> {
    config: SummarizerConfig,
    segmenter: S,
    extractor: FeatureExtractor,
    combiner: ScoreCombiner,
}

impl Summarizer<Tokenizer> {
    /// Create a summarizer with the built-in tokenizer
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        let profile = LanguageProfile::resolve(&config.language, &config.stopwords);
        Self::with_segmenter(config, Tokenizer::with_profile(profile))
    }
}

impl<S: Segmenter + Sync> Summarizer<S> {
    /// Create a summarizer around an external segmenter
    pub fn with_segmenter(config: SummarizerConfig, segmenter: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            extractor: FeatureExtractor::new().with_ideal_length(config.ideal_length),
            combiner: ScoreCombiner::new(config.weights),
            config,
            segmenter,
        })
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    /// Summarize with the configured sentence count and delimiter
    pub fn summarize(&self, title: &str, document: &str) -> Result<String> {
        Ok(self.rank(title, document)?.render())
    }

    /// Like [`Self::summarize`], but returns the selected sentences with
    /// their features
    pub fn rank(&self, title: &str, document: &str) -> Result<Summary> {
        self.rank_with(
            title,
            document,
            self.config.max_sentences,
            &self.config.delimiter,
        )
    }

    /// Rank with an explicit sentence count and delimiter
    pub fn rank_with(
        &self,
        title: &str,
        document: &str,
        max_sentences: usize,
        delimiter: &str,
    ) -> Result<Summary> {
        let sentences = {
            trace_stage!("segment");
            self.segmenter.split_sentences(document)
        };
        let title_words = self.segmenter.tokenize(title, false);
        let words = self.feature_words(&sentences);

        self.score_and_select(sentences, words, &title_words, max_sentences, delimiter)
    }

    /// Summarize a document segmented elsewhere.
    ///
    /// Sentence and title feature tokens are taken from the document when
    /// present, otherwise derived with this summarizer's segmenter.
    pub fn summarize_pretokenized(&self, document: PretokenizedDocument) -> Result<Summary> {
        let PretokenizedDocument {
            title,
            sentences,
            title_words,
            words,
        } = document;

        let words = match words {
            Some(words) if words.len() != sentences.len() => {
                return Err(SummarizerError::malformed_input(format!(
                    "{} word lists for {} sentences",
                    words.len(),
                    sentences.len()
                )));
            }
            Some(words) => words,
            None => self.feature_words(&sentences),
        };
        let title_words = title_words.unwrap_or_else(|| self.segmenter.tokenize(&title, false));

        self.score_and_select(
            sentences,
            words,
            &title_words,
            self.config.max_sentences,
            &self.config.delimiter,
        )
    }

    /// Stopword-free feature tokens for every sentence
    fn feature_words(&self, sentences: &[Sentence]) -> Vec<Vec<String>> {
        trace_stage!("tokenize");
        if sentences.len() >= self.config.parallel_threshold {
            sentences
                .par_iter()
                .map(|s| self.segmenter.tokenize(&s.text, false))
                .collect()
        } else {
            sentences
                .iter()
                .map(|s| self.segmenter.tokenize(&s.text, false))
                .collect()
        }
    }

    fn score_and_select(
        &self,
        sentences: Vec<Sentence>,
        words: Vec<Vec<String>>,
        title_words: &[String],
        max_sentences: usize,
        delimiter: &str,
    ) -> Result<Summary> {
        validate_sentences(&sentences)?;

        let frequencies = {
            trace_stage!("term_frequencies");
            TermFrequencyTable::build(&sentences, self.segmenter.stopwords())
        };
        let keywords = {
            trace_stage!("keywords");
            top_keywords(&frequencies, self.config.top_k)
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = sentences.len(),
            terms = frequencies.len(),
            total = frequencies.total_count(),
            keywords = keywords.len(),
            "document tables built"
        );

        let ctx = DocumentContext::new(&keywords, title_words, sentences.len());
        let scored = {
            trace_stage!("features");
            self.score_sentences(sentences, &words, &ctx)
        };

        let ranked = {
            trace_stage!("rank");
            SentenceRanker::new().rank(scored, max_sentences)
        };

        Ok(SummaryAssembler::new(delimiter).assemble(ranked))
    }

    /// Memoization pass: each sentence is scored exactly once before sorting
    fn score_sentences(
        &self,
        sentences: Vec<Sentence>,
        words: &[Vec<String>],
        ctx: &DocumentContext<'_>,
    ) -> Vec<ScoredSentence> {
        let score = |(sentence, words): (Sentence, &Vec<String>)| {
            let raw = self.extractor.extract(words, sentence.index, ctx);
            ScoredSentence {
                features: self.combiner.combine(raw),
                sentence,
            }
        };

        if sentences.len() >= self.config.parallel_threshold {
            sentences.into_par_iter().zip(words.par_iter()).map(score).collect()
        } else {
            sentences.into_iter().zip(words.iter()).map(score).collect()
        }
    }
}

/// Sentences must be indexed `0..n` in document order, and any sentence
/// with text must carry its raw tokens.
fn validate_sentences(sentences: &[Sentence]) -> Result<()> {
    for (expected, sentence) in sentences.iter().enumerate() {
        if sentence.index != expected {
            return Err(SummarizerError::malformed_input(format!(
                "sentence at position {} has index {}",
                expected, sentence.index
            )));
        }
        if sentence.tokens.is_empty() && !sentence.text.trim().is_empty() {
            return Err(SummarizerError::malformed_input(format!(
                "sentence {} has text but no tokens",
                sentence.index
            )));
        }
    }
    Ok(())
}
