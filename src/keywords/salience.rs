//! Keyword salience
//!
//! The top-K terms of a document and their relative frequency.

use super::frequency::TermFrequencyTable;
use rustc_hash::FxHashMap;

/// Default size of the keyword vocabulary
pub const DEFAULT_TOP_K: usize = 10;

/// Salience scores for the K most frequent terms of a document.
///
/// Each score is `count / total_count`, where the total comes from the whole
/// filtered frequency table, so scores lie in `[0, 1]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordScoreTable {
    scores: FxHashMap<String, f64>,
    /// Terms in selection order (highest count first)
    ranked: Vec<String>,
}

impl KeywordScoreTable {
    /// Salience of a term, if it is a keyword
    pub fn score(&self, term: &str) -> Option<f64> {
        self.scores.get(term).copied()
    }

    /// Salience of a term, 0 when it is not a keyword
    pub fn score_or_zero(&self, term: &str) -> f64 {
        self.score(term).unwrap_or(0.0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.scores.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Keywords in selection order
    pub fn terms(&self) -> &[String] {
        &self.ranked
    }

    /// `(term, score)` pairs in selection order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ranked
            .iter()
            .map(move |t| (t.as_str(), self.scores[t.as_str()]))
    }
}

/// Select the `k` most frequent terms and score them.
///
/// Ties on count are broken by lexicographic order of the term so the
/// vocabulary is reproducible run to run.
pub fn top_keywords(table: &TermFrequencyTable, k: usize) -> KeywordScoreTable {
    let total = table.total_count();
    if total == 0 {
        return KeywordScoreTable::default();
    }

    let mut scores = FxHashMap::default();
    let mut ranked = Vec::with_capacity(k.min(table.len()));

    for (term, count) in table.top_terms(k) {
        let term = term.to_lowercase();
        scores.insert(term.clone(), count as f64 / total as f64);
        ranked.push(term);
    }

    KeywordScoreTable { scores, ranked }
}
