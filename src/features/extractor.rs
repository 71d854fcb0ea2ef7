//! Per-sentence feature extraction
//!
//! Every feature is a pure function of the sentence's own feature tokens and
//! the read-only document context, so sentences can be processed in any
//! order or in parallel.

use crate::keywords::KeywordScoreTable;
use crate::types::FeatureSet;
use rustc_hash::FxHashSet;

/// Reference sentence length, in tokens
pub const IDEAL_LENGTH: f64 = 20.0;

/// Upper bounds of the ten position buckets `(0, 0.1], (0.1, 0.2], ...`
const POSITION_BOUNDS: [f64; 10] = [0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

/// Feature value of each position bucket. Openings and closings of a
/// document carry the most weight.
const POSITION_VALUES: [f64; 10] = [0.17, 0.23, 0.14, 0.08, 0.05, 0.04, 0.06, 0.04, 0.04, 0.15];

/// Document-level data shared by every sentence
#[derive(Debug)]
pub struct DocumentContext<'a> {
    keywords: &'a KeywordScoreTable,
    title: FxHashSet<&'a str>,
    title_len: usize,
    sentence_count: usize,
}

impl<'a> DocumentContext<'a> {
    pub fn new(
        keywords: &'a KeywordScoreTable,
        title_words: &'a [String],
        sentence_count: usize,
    ) -> Self {
        Self {
            keywords,
            title: title_words.iter().map(String::as_str).collect(),
            title_len: title_words.len(),
            sentence_count,
        }
    }

    pub fn keywords(&self) -> &KeywordScoreTable {
        self.keywords
    }

    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }
}

/// Computes the five raw features of a sentence
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    ideal_length: f64,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor {
    pub fn new() -> Self {
        Self {
            ideal_length: IDEAL_LENGTH,
        }
    }

    /// Use a different reference sentence length
    pub fn with_ideal_length(mut self, ideal_length: f64) -> Self {
        self.ideal_length = ideal_length;
        self
    }

    /// Extract features for the sentence at `index`.
    ///
    /// `words` are the sentence's feature tokens: lower-cased, punctuation
    /// stripped, stopwords removed, duplicates kept. The combined fields of
    /// the returned set are left at zero.
    pub fn extract(&self, words: &[String], index: usize, ctx: &DocumentContext<'_>) -> FeatureSet {
        FeatureSet {
            title: title_feature(words, &ctx.title, ctx.title_len),
            length: length_feature(words.len(), self.ideal_length),
            position: position_feature(index, ctx.sentence_count),
            sbs: sbs(words, ctx.keywords),
            dbs: dbs(words, ctx.keywords),
            ..FeatureSet::default()
        }
    }
}

/// Share of sentence tokens (counted with repetition) that appear in the
/// title, normalized by `title_len + 1`.
pub fn title_feature(words: &[String], title: &FxHashSet<&str>, title_len: usize) -> f64 {
    let matches = words.iter().filter(|w| title.contains(w.as_str())).count();
    matches as f64 / (title_len as f64 + 1.0)
}

/// `(ideal - |ideal - n|) / ideal`; 1.0 at the ideal length, decreasing
/// linearly on both sides (negative beyond twice the ideal).
pub fn length_feature(n: usize, ideal: f64) -> f64 {
    (ideal - (ideal - n as f64).abs()) / ideal
}

/// Step function over the relative position `(index + 1) / count`
pub fn position_feature(index: usize, sentence_count: usize) -> f64 {
    if sentence_count == 0 {
        return 0.0;
    }

    let normalized = (index as f64 + 1.0) / sentence_count as f64;
    let mut lower = 0.0;
    for (upper, value) in POSITION_BOUNDS.iter().zip(POSITION_VALUES.iter()) {
        if normalized > lower && normalized <= *upper {
            return *value;
        }
        lower = *upper;
    }

    0.0
}

/// Summation-based selection: mean keyword salience over all tokens
pub fn sbs(words: &[String], keywords: &KeywordScoreTable) -> f64 {
    if words.is_empty() {
        return 0.0;
    }

    let sum: f64 = words.iter().map(|w| keywords.score_or_zero(w)).sum();
    (1.0 / words.len() as f64) * sum
}

/// Density-based selection.
///
/// Walks the keyword occurrences in order; each consecutive pair adds
/// `score(prev) * score(cur) / distance^2`, with distance measured in the
/// full token sequence. The sum is scaled by `(k + 1) / k` for `k` keyword
/// occurrences.
pub fn dbs(words: &[String], keywords: &KeywordScoreTable) -> f64 {
    let mut sum = 0.0;
    let mut k = 0usize;
    let mut previous: Option<(usize, f64)> = None;

    for (idx, word) in words.iter().enumerate() {
        let Some(score) = keywords.score(word) else {
            continue;
        };

        if let Some((prev_idx, prev_score)) = previous {
            let distance = (idx - prev_idx) as f64;
            sum += prev_score * score / distance.powi(2);
        }

        previous = Some((idx, score));
        k += 1;
    }

    if k == 0 {
        return 0.0;
    }

    let k = k as f64;
    (1.0 / k * (k + 1.0)) * sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::{top_keywords, TermFrequencyTable};
    use crate::nlp::stopwords::StopwordTable;

    fn words(ws: &[&str]) -> Vec<String> {
        ws.iter().map(|w| w.to_string()).collect()
    }

    /// a: 4/8, b: 2/8, c: 1/8, d: 1/8
    fn keywords() -> KeywordScoreTable {
        let tf = TermFrequencyTable::from_tokens(
            ["a", "a", "a", "a", "b", "b", "c", "d"],
            &StopwordTable::empty(),
        );
        top_keywords(&tf, 10)
    }

    #[test]
    fn test_title_counts_duplicates() {
        let title_words = words(&["cat", "mat"]);
        let title: FxHashSet<&str> = title_words.iter().map(String::as_str).collect();

        let sentence = words(&["cat", "cat", "dog", "mat"]);
        let value = title_feature(&sentence, &title, title_words.len());
        assert!((value - 3.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_title_empty() {
        let title = FxHashSet::default();
        assert_eq!(title_feature(&words(&["cat", "dog"]), &title, 0), 0.0);
    }

    #[test]
    fn test_length_peaks_at_ideal() {
        assert_eq!(length_feature(20, IDEAL_LENGTH), 1.0);
        assert_eq!(length_feature(10, IDEAL_LENGTH), 0.5);
        assert_eq!(length_feature(30, IDEAL_LENGTH), 0.5);
        assert_eq!(length_feature(0, IDEAL_LENGTH), 0.0);
        assert_eq!(length_feature(50, IDEAL_LENGTH), -0.5);
    }

    #[test]
    fn test_position_buckets() {
        assert_eq!(position_feature(0, 10), 0.17);
        assert_eq!(position_feature(1, 10), 0.23);
        assert_eq!(position_feature(2, 10), 0.14);
        assert_eq!(position_feature(4, 10), 0.05);
        assert_eq!(position_feature(6, 10), 0.06);
        assert_eq!(position_feature(9, 10), 0.15);
    }

    #[test]
    fn test_position_out_of_range() {
        assert_eq!(position_feature(0, 0), 0.0);
        assert_eq!(position_feature(10, 10), 0.0);
        // single sentence: p = 1.0 falls in the last bucket
        assert_eq!(position_feature(0, 1), 0.15);
    }

    #[test]
    fn test_sbs() {
        let kw = keywords();
        let value = sbs(&words(&["a", "x", "b", "x"]), &kw);
        assert!((value - (0.5 + 0.25) / 4.0).abs() < 1e-12);
        assert_eq!(sbs(&[], &kw), 0.0);
    }

    #[test]
    fn test_dbs_pairs_and_scaling() {
        let kw = keywords();
        // keywords at 0 (a), 2 (b), 3 (a); k = 3
        let sentence = words(&["a", "x", "b", "a"]);
        let sum = 0.5 * 0.25 / 4.0 + 0.25 * 0.5 / 1.0;
        let expected = (1.0 / 3.0 * 4.0) * sum;
        assert!((dbs(&sentence, &kw) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_dbs_single_keyword() {
        let kw = keywords();
        assert_eq!(dbs(&words(&["x", "a", "y"]), &kw), 0.0);
        assert_eq!(dbs(&words(&["x", "y"]), &kw), 0.0);
        assert_eq!(dbs(&[], &kw), 0.0);
    }

    #[test]
    fn test_extract_leaves_combined_fields_empty() {
        let kw = keywords();
        let title = words(&["a"]);
        let ctx = DocumentContext::new(&kw, &title, 4);
        let features = FeatureExtractor::new().extract(&words(&["a", "b"]), 0, &ctx);

        assert!((features.title - 0.5).abs() < 1e-12);
        assert!((features.length - 0.1).abs() < 1e-12);
        assert_eq!(features.position, 0.14);
        assert_eq!(features.keyword_frequency, 0.0);
        assert_eq!(features.score, 0.0);
    }
}
