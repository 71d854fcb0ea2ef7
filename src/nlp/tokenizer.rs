//! Sentence segmentation and tokenization
//!
//! The summarizer consumes segmentation through the [`Segmenter`] trait so
//! that any NLP front end can be plugged in. [`Tokenizer`] is the built-in
//! implementation: UAX #29 sentence boundaries, and either UAX #29 word
//! boundaries or whitespace splitting depending on the language profile.

use super::language::{LanguageProfile, TokenizerStrategy};
use super::stopwords::StopwordTable;
use crate::types::Sentence;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{P}").expect("punctuation class is a valid pattern"));

/// Remove every Unicode punctuation character (general category `P`)
pub fn strip_punctuation(text: &str) -> Cow<'_, str> {
    PUNCTUATION.replace_all(text, "")
}

/// Lower-case a raw token and strip its punctuation. May return an empty
/// string for pure-punctuation tokens.
pub fn normalize_term(token: &str) -> String {
    strip_punctuation(&token.to_lowercase()).into_owned()
}

/// The interface the summarizer needs from an NLP front end.
pub trait Segmenter {
    /// Split a document into sentences, indexed `0..n` in document order,
    /// each carrying its raw tokens (punctuation and stopwords included).
    fn split_sentences(&self, document: &str) -> Vec<Sentence>;

    /// Split text into lower-cased, punctuation-free tokens, dropping
    /// stopwords unless `include_stopwords` is set.
    fn tokenize(&self, text: &str, include_stopwords: bool) -> Vec<String>;

    /// The stopword table this segmenter filters with
    fn stopwords(&self) -> &StopwordTable;
}

/// A Unicode-aware tokenizer following UAX #29
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    profile: LanguageProfile,
}

impl Tokenizer {
    /// Create an English tokenizer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer for a resolved language profile
    pub fn with_profile(profile: LanguageProfile) -> Self {
        Self { profile }
    }

    /// Create a tokenizer for a language code (unknown codes get English)
    pub fn for_language(code: &str) -> Self {
        Self::with_profile(LanguageProfile::resolve(code, &[]))
    }

    pub fn profile(&self) -> &LanguageProfile {
        &self.profile
    }

    /// Remove escaped line breaks (`\n`, `\r` written out literally) and
    /// stray backslashes, then collapse whitespace runs to single spaces.
    ///
    /// UAX #29 always breaks a sentence after a line feed, so hard-wrapped
    /// text would otherwise be split mid-sentence.
    pub fn clean_document(document: &str) -> String {
        let unescaped = document
            .replace("\\n", "")
            .replace("\\r", "")
            .replace('\\', "");
        unescaped.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn raw_tokens(&self, text: &str) -> Vec<String> {
        match self.profile.strategy {
            TokenizerStrategy::UnicodeWords => text
                .split_word_bounds()
                .filter(|w| !w.trim().is_empty())
                .map(str::to_string)
                .collect(),
            TokenizerStrategy::Whitespace => {
                text.split_whitespace().map(str::to_string).collect()
            }
        }
    }

    /// Find sentence boundaries in text
    fn sentence_boundaries(&self, text: &str) -> Vec<(usize, usize)> {
        let mut boundaries = Vec::new();
        let mut start = 0;

        for (idx, _) in text.split_sentence_bound_indices() {
            if idx > start && !text[start..idx].trim().is_empty() {
                boundaries.push((start, idx));
            }
            start = idx;
        }

        if start < text.len() && !text[start..].trim().is_empty() {
            boundaries.push((start, text.len()));
        }

        boundaries
    }
}

impl Segmenter for Tokenizer {
    fn split_sentences(&self, document: &str) -> Vec<Sentence> {
        let cleaned = Self::clean_document(document);

        self.sentence_boundaries(&cleaned)
            .into_iter()
            .enumerate()
            .map(|(index, (start, end))| {
                let text = cleaned[start..end].trim();
                Sentence::new(text, index, self.raw_tokens(text))
            })
            .collect()
    }

    // Same token stream and normalization as term counting, so every
    // keyword can occur among the feature tokens
    fn tokenize(&self, text: &str, include_stopwords: bool) -> Vec<String> {
        self.raw_tokens(text)
            .iter()
            .map(|token| normalize_term(token))
            .filter(|w| !w.is_empty())
            .filter(|w| include_stopwords || !self.profile.stopwords.contains(w))
            .collect()
    }

    fn stopwords(&self) -> &StopwordTable {
        &self.profile.stopwords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::language::Language;

    fn small_english() -> Tokenizer {
        Tokenizer::with_profile(LanguageProfile {
            language: Language::English,
            strategy: TokenizerStrategy::UnicodeWords,
            stopwords: StopwordTable::from_list(&["the", "on", "and"]),
        })
    }

    #[test]
    fn test_basic_sentence_split() {
        let tokenizer = Tokenizer::new();
        let sentences = tokenizer.split_sentences("Hello world. This is a test.");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].index, 0);
        assert_eq!(sentences[1].index, 1);
        assert_eq!(sentences[0].text, "Hello world.");
        assert_eq!(sentences[1].text, "This is a test.");
    }

    #[test]
    fn test_raw_tokens_keep_punctuation_and_stopwords() {
        let tokenizer = Tokenizer::new();
        let sentences = tokenizer.split_sentences("The cat sat on the mat.");

        assert_eq!(
            sentences[0].tokens,
            vec!["The", "cat", "sat", "on", "the", "mat", "."]
        );
    }

    #[test]
    fn test_tokenize_drops_stopwords_and_punctuation() {
        let tokenizer = small_english();

        let words = tokenizer.tokenize("The cat sat on the mat.", false);
        assert_eq!(words, vec!["cat", "sat", "mat"]);

        let all = tokenizer.tokenize("The cat sat on the mat.", true);
        assert_eq!(all, vec!["the", "cat", "sat", "on", "the", "mat"]);
    }

    #[test]
    fn test_tokenize_keeps_duplicates() {
        let tokenizer = small_english();
        let words = tokenizer.tokenize("Cat, cat and CAT!", false);
        assert_eq!(words, vec!["cat", "cat", "cat"]);
    }

    #[test]
    fn test_normalize_term() {
        assert_eq!(normalize_term("Mat."), "mat");
        assert_eq!(normalize_term("«Hello»"), "hello");
        assert_eq!(normalize_term("..."), "");
        assert_eq!(normalize_term("don't"), "dont");
    }

    #[test]
    fn test_clean_document() {
        let cleaned = Tokenizer::clean_document(r"First line.\nSecond\\ line.\r");
        assert_eq!(cleaned, "First line.Second line.");
    }

    #[test]
    fn test_symbols_kept_for_counting_and_features() {
        use crate::keywords::{top_keywords, TermFrequencyTable};

        let tokenizer = small_english();
        let sentences =
            tokenizer.split_sentences("Prices rose $5 and $6 and $7 today. The $ sign shows money $ $.");

        let frequencies = TermFrequencyTable::build(&sentences, tokenizer.stopwords());
        let keywords = top_keywords(&frequencies, 10);
        assert_eq!(keywords.terms()[0], "$");

        let words: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| tokenizer.tokenize(&s.text, false))
            .collect();
        assert_eq!(words[0], vec!["prices", "rose", "$", "5", "$", "6", "$", "7", "today"]);
        assert_eq!(words[1], vec!["$", "sign", "shows", "money", "$", "$"]);

        for term in keywords.terms() {
            assert!(words.iter().flatten().any(|w| w == term), "keyword {} never scored", term);
        }
    }

    #[test]
    fn test_feature_tokens_match_counted_terms() {
        let tokenizer = small_english();
        let sentences = tokenizer.split_sentences("An e-mail, don't panic.");

        let counted: Vec<String> = sentences[0]
            .tokens
            .iter()
            .map(|t| normalize_term(t))
            .filter(|t| !t.is_empty() && !tokenizer.stopwords().contains(t))
            .collect();
        assert_eq!(tokenizer.tokenize(&sentences[0].text, false), counted);
    }

    #[test]
    fn test_wrapped_lines_stay_one_sentence() {
        let tokenizer = Tokenizer::new();
        let sentences = tokenizer.split_sentences("A sentence wrapped\nacross lines.\n\nNext one.");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "A sentence wrapped across lines.");
        assert_eq!(sentences[1].text, "Next one.");
    }

    #[test]
    fn test_whitespace_strategy() {
        let tokenizer = Tokenizer::for_language("ru");
        let words = tokenizer.tokenize("Кошка сидит на ковре.", true);
        assert_eq!(words, vec!["кошка", "сидит", "на", "ковре"]);
    }

    #[test]
    fn test_empty_input() {
        let tokenizer = Tokenizer::new();

        assert!(tokenizer.split_sentences("").is_empty());
        assert!(tokenizer.split_sentences("   \n  ").is_empty());
        assert!(tokenizer.tokenize("", false).is_empty());
    }

    #[test]
    fn test_unicode_handling() {
        let tokenizer = Tokenizer::for_language("fr");
        let sentences = tokenizer.split_sentences("Café résumé naïve. Très bien!");

        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].tokens.iter().any(|t| t == "résumé"));
    }
}
