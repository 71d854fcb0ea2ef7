//! Document-wide term frequencies
//!
//! Counts normalized terms across every sentence of a document, then drops
//! stopwords and the empty term.

use crate::nlp::stopwords::StopwordTable;
use crate::nlp::tokenizer::normalize_term;
use crate::types::Sentence;
use rustc_hash::FxHashMap;

/// Term → occurrence count for one document.
///
/// Keys are lower-cased and punctuation-free. The table never holds a
/// stopword of its language or the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermFrequencyTable {
    counts: FxHashMap<String, usize>,
    total: usize,
}

impl TermFrequencyTable {
    /// Count the raw tokens of every sentence
    pub fn build(sentences: &[Sentence], stopwords: &StopwordTable) -> Self {
        Self::from_tokens(
            sentences
                .iter()
                .flat_map(|s| s.tokens.iter().map(String::as_str)),
            stopwords,
        )
    }

    /// Count an arbitrary stream of raw tokens
    pub fn from_tokens<'a, I>(tokens: I, stopwords: &StopwordTable) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts: FxHashMap<String, usize> = FxHashMap::default();

        for token in tokens {
            let term = normalize_term(token);
            if !term.is_empty() {
                *counts.entry(term).or_insert(0) += 1;
            }
        }

        // Stopwords match against normalized keys, once counting is done
        counts.retain(|term, _| !term.is_empty() && !stopwords.contains(term));

        let total = counts.values().sum();
        Self { counts, total }
    }

    /// Occurrences of a term (0 if absent)
    pub fn count(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Sum of all counts after filtering
    pub fn total_count(&self) -> usize {
        self.total
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(t, &c)| (t.as_str(), c))
    }

    /// The `k` most frequent terms: higher count first, then
    /// lexicographically smaller term.
    pub fn top_terms(&self, k: usize) -> Vec<(&str, usize)> {
        let mut terms: Vec<(&str, usize)> = self.iter().collect();
        terms.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(k);
        terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn sentences() -> Vec<Sentence> {
        vec![
            Sentence::new(
                "The cat sat on the mat.",
                0,
                toks(&["The", "cat", "sat", "on", "the", "mat", "."]),
            ),
            Sentence::new(
                "The cat is happy.",
                1,
                toks(&["The", "cat", "is", "happy", "."]),
            ),
        ]
    }

    #[test]
    fn test_counts_normalized_terms() {
        let stop = StopwordTable::from_list(&["the", "on", "is"]);
        let table = TermFrequencyTable::build(&sentences(), &stop);

        assert_eq!(table.count("cat"), 2);
        assert_eq!(table.count("mat"), 1);
        assert_eq!(table.count("the"), 0);
        assert_eq!(table.count("."), 0);
        assert_eq!(table.count(""), 0);
        assert_eq!(table.len(), 4);
        assert_eq!(table.total_count(), 5);
    }

    #[test]
    fn test_total_is_after_filtering() {
        let stop = StopwordTable::empty();
        let unfiltered = TermFrequencyTable::build(&sentences(), &stop);
        // the x3, cat x2, sat, on, mat, is, happy
        assert_eq!(unfiltered.total_count(), 10);

        let stop = StopwordTable::from_list(&["the"]);
        let filtered = TermFrequencyTable::build(&sentences(), &stop);
        assert_eq!(filtered.total_count(), 7);
    }

    #[test]
    fn test_punctuation_inside_tokens() {
        let stop = StopwordTable::from_list(&["dont"]);
        let table = TermFrequencyTable::from_tokens(["Don't", "e-mail", "--", "E-Mail!"], &stop);

        assert_eq!(table.count("dont"), 0);
        assert_eq!(table.count("email"), 2);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_empty_document() {
        let table = TermFrequencyTable::build(&[], &StopwordTable::empty());
        assert!(table.is_empty());
        assert_eq!(table.total_count(), 0);
        assert!(table.top_terms(10).is_empty());
    }

    #[test]
    fn test_top_terms_tie_break() {
        let table = TermFrequencyTable::from_tokens(
            ["pear", "apple", "fig", "apple", "pear", "kiwi"],
            &StopwordTable::empty(),
        );

        let top = table.top_terms(3);
        assert_eq!(top, vec![("apple", 2), ("pear", 2), ("fig", 1)]);
    }
}
