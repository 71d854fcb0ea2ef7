//! Language capability lookup
//!
//! A language code resolves once per call to a [`LanguageProfile`]: the
//! tokenizer strategy to use and the stopword table to filter with.
//! Unknown codes resolve to English.

use super::stopwords::StopwordTable;
use serde::{Deserialize, Serialize};

/// Languages with dedicated handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Dutch,
    Arabic,
    Russian,
    ChineseSimplified,
}

/// How raw text is split into word tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerStrategy {
    /// UAX #29 word boundaries
    UnicodeWords,
    /// Split on whitespace only; for scripts where the input is expected to
    /// be pre-segmented
    Whitespace,
}

impl Language {
    /// Resolve a language code. Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_lowercase().as_str() {
            "en" | "english" => Language::English,
            "es" | "spanish" => Language::Spanish,
            "fr" | "french" => Language::French,
            "de" | "german" => Language::German,
            "it" | "italian" => Language::Italian,
            "pt" | "portuguese" => Language::Portuguese,
            "nl" | "dutch" => Language::Dutch,
            "ar" | "arabic" => Language::Arabic,
            "ru" | "russian" => Language::Russian,
            "zh-cn" | "zh" | "zh_cn" | "chinese" => Language::ChineseSimplified,
            _ => Language::English,
        }
    }

    /// Canonical code for this language
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Portuguese => "pt",
            Language::Dutch => "nl",
            Language::Arabic => "ar",
            Language::Russian => "ru",
            Language::ChineseSimplified => "zh-cn",
        }
    }

    pub fn tokenizer_strategy(&self) -> TokenizerStrategy {
        match self {
            Language::Russian | Language::ChineseSimplified => TokenizerStrategy::Whitespace,
            _ => TokenizerStrategy::UnicodeWords,
        }
    }
}

/// Everything the pipeline needs to know about a language, resolved once.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    pub language: Language,
    pub strategy: TokenizerStrategy,
    pub stopwords: StopwordTable,
}

impl LanguageProfile {
    /// Resolve a profile from a language code, with optional extra stopwords
    pub fn resolve(code: &str, extra_stopwords: &[String]) -> Self {
        let language = Language::from_code(code);
        let mut stopwords = StopwordTable::for_language(language);
        stopwords.extend(extra_stopwords);
        Self {
            language,
            strategy: language.tokenizer_strategy(),
            stopwords,
        }
    }
}

impl Default for LanguageProfile {
    fn default() -> Self {
        Self::resolve("en", &[])
    }
}
