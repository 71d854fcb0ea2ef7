//! Native Python interface
//!
//! Direct Python classes for plain-text documents; the built-in tokenizer
//! does the segmentation.

use super::to_py_err;
use crate::nlp::stopwords::StopwordTable;
use crate::summarizer::{ScoredSentence, Summarizer, Summary};
use crate::types::{SummarizerConfig, DEFAULT_DELIMITER};
use pyo3::prelude::*;

/// A selected sentence with its features
#[pyclass(name = "ScoredSentence")]
#[derive(Clone)]
pub struct PyScoredSentence {
    #[pyo3(get)]
    pub text: String,
    #[pyo3(get)]
    pub index: usize,
    #[pyo3(get)]
    pub score: f64,
    #[pyo3(get)]
    pub title: f64,
    #[pyo3(get)]
    pub length: f64,
    #[pyo3(get)]
    pub position: f64,
    #[pyo3(get)]
    pub sbs: f64,
    #[pyo3(get)]
    pub dbs: f64,
    #[pyo3(get)]
    pub keyword_frequency: f64,
}

#[pymethods]
impl PyScoredSentence {
    fn __repr__(&self) -> String {
        format!(
            "ScoredSentence(index={}, score={:.1}, text='{}')",
            self.index, self.score, self.text
        )
    }

    fn __str__(&self) -> String {
        self.text.clone()
    }
}

impl From<ScoredSentence> for PyScoredSentence {
    fn from(s: ScoredSentence) -> Self {
        let f = s.features;
        Self {
            text: s.sentence.text,
            index: s.sentence.index,
            score: f.score,
            title: f.title,
            length: f.length,
            position: f.position,
            sbs: f.sbs,
            dbs: f.dbs,
            keyword_frequency: f.keyword_frequency,
        }
    }
}

/// Ranked summary sentences
#[pyclass(name = "Summary")]
#[derive(Clone)]
pub struct PySummary {
    #[pyo3(get)]
    pub sentences: Vec<PyScoredSentence>,
    #[pyo3(get)]
    pub delimiter: String,
}

#[pymethods]
impl PySummary {
    /// The rendered summary: every sentence followed by the delimiter
    fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| format!("{}{}", s.text, self.delimiter))
            .collect()
    }

    /// Document indices of the selected sentences, in ranked order
    fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }

    fn __repr__(&self) -> String {
        format!("Summary(sentences={})", self.sentences.len())
    }

    fn __str__(&self) -> String {
        self.text()
    }

    fn __len__(&self) -> usize {
        self.sentences.len()
    }

    fn __getitem__(&self, idx: usize) -> PyResult<PyScoredSentence> {
        self.sentences
            .get(idx)
            .cloned()
            .ok_or_else(|| pyo3::exceptions::PyIndexError::new_err("index out of range"))
    }
}

impl From<Summary> for PySummary {
    fn from(summary: Summary) -> Self {
        Self {
            sentences: summary
                .sentences
                .into_iter()
                .map(PyScoredSentence::from)
                .collect(),
            delimiter: summary.delimiter,
        }
    }
}

/// Summarize a document in one call.
#[pyfunction]
#[pyo3(signature = (title, text, max_sentences=3, delimiter=None, language="en"))]
pub fn summarize(
    title: &str,
    text: &str,
    max_sentences: usize,
    delimiter: Option<&str>,
    language: &str,
) -> PyResult<String> {
    crate::summarize(title, text, max_sentences, delimiter, language).map_err(to_py_err)
}

/// Get the built-in stopword list for a language.
#[pyfunction]
#[pyo3(signature = (language = "en"))]
pub fn get_stopwords(language: &str) -> PyResult<Vec<String>> {
    Ok(StopwordTable::for_code(language).to_sorted_vec())
}

/// Reusable summarizer; the language profile is resolved once
#[pyclass(name = "Summarizer")]
pub struct PySummarizer {
    inner: Summarizer,
}

#[pymethods]
impl PySummarizer {
    #[new]
    #[pyo3(signature = (
        language="en",
        max_sentences=3,
        delimiter=None,
        top_k=10,
        ideal_length=20.0,
        stopwords=None
    ))]
    fn new(
        language: &str,
        max_sentences: usize,
        delimiter: Option<&str>,
        top_k: usize,
        ideal_length: f64,
        stopwords: Option<Vec<String>>,
    ) -> PyResult<Self> {
        let config = SummarizerConfig::default()
            .with_language(language)
            .with_max_sentences(max_sentences)
            .with_delimiter(delimiter.unwrap_or(DEFAULT_DELIMITER))
            .with_top_k(top_k)
            .with_ideal_length(ideal_length)
            .with_stopwords(stopwords.unwrap_or_default());

        Ok(Self {
            inner: Summarizer::new(config).map_err(to_py_err)?,
        })
    }

    /// Summarize to a string
    #[pyo3(signature = (title, text))]
    fn summarize(&self, py: Python<'_>, title: &str, text: &str) -> PyResult<String> {
        py.allow_threads(|| self.inner.summarize(title, text))
            .map_err(to_py_err)
    }

    /// Ranked sentences with their features
    #[pyo3(signature = (title, text, max_sentences=None))]
    fn rank(
        &self,
        py: Python<'_>,
        title: &str,
        text: &str,
        max_sentences: Option<usize>,
    ) -> PyResult<PySummary> {
        let config = self.inner.config();
        let limit = max_sentences.unwrap_or(config.max_sentences);
        py.allow_threads(|| self.inner.rank_with(title, text, limit, &config.delimiter))
            .map(PySummary::from)
            .map_err(to_py_err)
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "Summarizer(language='{}', max_sentences={}, top_k={})",
            config.language, config.max_sentences, config.top_k
        )
    }
}
