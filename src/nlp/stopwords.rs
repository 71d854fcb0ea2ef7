//! Stopword tables
//!
//! Per-language stopword sets backed by the `stop-words` crate, with an
//! embedded list for simplified Chinese. A table is an immutable value that
//! the pipeline borrows; there is no process-wide stopword state.

use super::language::Language;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of lower-cased stop tokens for one language
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StopwordTable {
    words: FxHashSet<String>,
}

impl StopwordTable {
    /// Built-in table for a language
    pub fn for_language(language: Language) -> Self {
        Self {
            words: Self::load(language),
        }
    }

    /// Built-in table for a language code; unknown codes get English
    pub fn for_code(code: &str) -> Self {
        Self::for_language(Language::from_code(code))
    }

    /// A table that filters nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            words: words.iter().map(|w| w.trim().to_lowercase()).collect(),
        }
    }

    /// Add more words to the table
    pub fn extend<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() {
                self.words.insert(word);
            }
        }
    }

    /// Exact lookup on the lower-cased form
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word) || self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words, sorted
    pub fn to_sorted_vec(&self) -> Vec<String> {
        let mut words: Vec<String> = self.words.iter().cloned().collect();
        words.sort();
        words
    }

    fn load(language: Language) -> FxHashSet<String> {
        let lang = match language {
            Language::English => LANGUAGE::English,
            Language::Spanish => LANGUAGE::Spanish,
            Language::French => LANGUAGE::French,
            Language::German => LANGUAGE::German,
            Language::Italian => LANGUAGE::Italian,
            Language::Portuguese => LANGUAGE::Portuguese,
            Language::Dutch => LANGUAGE::Dutch,
            Language::Arabic => LANGUAGE::Arabic,
            Language::Russian => LANGUAGE::Russian,
            // Not carried by the crate
            Language::ChineseSimplified => return Self::chinese_stopwords(),
        };

        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }

    fn chinese_stopwords() -> FxHashSet<String> {
        [
            "的", "是", "在", "有", "和", "与", "或", "不", "了", "也", "就", "都", "而", "及",
            "这", "那", "个", "为", "以", "等", "但", "被", "给", "让", "把", "从", "到", "对",
            "将", "于", "能", "会", "可", "要", "很", "还", "更", "最", "只", "已", "又", "再",
            "一", "一切", "一样", "一般", "上下", "不仅", "不但", "不过", "与其", "且", "之",
            "之一", "乃至", "也好", "于是", "人家", "什么", "从而", "他", "他们", "以便",
            "以及", "以至", "们", "任何", "但是", "何况", "作为", "你", "你们", "例如", "其",
            "其中", "其他", "其它", "别的", "即使", "另外", "只是", "只有", "只要", "可以",
            "可是", "各", "各种", "同时", "否则", "吧", "呢", "啊", "因为", "因此", "如果",
            "如此", "她", "她们", "它", "它们", "对于", "尽管", "并且", "我", "我们", "或者",
            "所以", "按照", "据", "既然", "然后", "然而", "由于", "着", "而且", "自己", "虽然",
            "这个", "这些", "这样", "那个", "那些", "那么", "除了",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }
}
