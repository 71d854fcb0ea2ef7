//! JSON interface for pre-segmented documents and batch processing
//!
//! Documents segmented by an external NLP pipeline (e.g. spaCy) are passed
//! as JSON, which keeps Python↔Rust overhead to one string each way.

use super::to_py_err;
use crate::errors::Result;
use crate::summarizer::{Summarizer, Summary};
use crate::types::{PretokenizedDocument, SummarizerConfig};
use pyo3::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Input document from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct JsonDocument {
    #[serde(flatten)]
    pub document: PretokenizedDocument,
    #[serde(default)]
    pub config: Option<SummarizerConfig>,
}

/// Output sentence for JSON
#[derive(Debug, Clone, Serialize)]
pub struct JsonSentence {
    pub text: String,
    pub index: usize,
    pub score: f64,
}

/// Output result for JSON
#[derive(Debug, Clone, Serialize)]
pub struct JsonResult {
    pub summary: String,
    pub sentences: Vec<JsonSentence>,
}

impl From<Summary> for JsonResult {
    fn from(summary: Summary) -> Self {
        Self {
            summary: summary.render(),
            sentences: summary
                .sentences
                .into_iter()
                .map(|s| JsonSentence {
                    score: s.score(),
                    text: s.sentence.text,
                    index: s.sentence.index,
                })
                .collect(),
        }
    }
}

fn run_document(doc: JsonDocument) -> Result<JsonResult> {
    let config = doc.config.unwrap_or_default();
    let summarizer = Summarizer::new(config)?;
    Ok(summarizer.summarize_pretokenized(doc.document)?.into())
}

fn summarize_json(json_input: &str) -> Result<String> {
    let doc: JsonDocument = serde_json::from_str(json_input)?;
    Ok(serde_json::to_string(&run_document(doc)?)?)
}

fn summarize_batch_json(json_input: &str) -> Result<String> {
    let docs: Vec<JsonDocument> = serde_json::from_str(json_input)?;
    let results = docs
        .into_par_iter()
        .map(run_document)
        .collect::<Result<Vec<_>>>()?;
    Ok(serde_json::to_string(&results)?)
}

/// Summarize one pre-segmented document
///
/// Args:
///     json_input: JSON object with `sentences`, optional `title`,
///         `title_words`, `words` and `config`
///
/// Returns:
///     JSON string with the rendered summary and the selected sentences
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn summarize_from_json(py: Python<'_>, json_input: &str) -> PyResult<String> {
    py.allow_threads(|| summarize_json(json_input))
        .map_err(to_py_err)
}

/// Summarize an array of pre-segmented documents
///
/// Returns:
///     JSON string with an array of results, in input order
#[pyfunction]
#[pyo3(signature = (json_input))]
pub fn summarize_batch_from_json(py: Python<'_>, json_input: &str) -> PyResult<String> {
    py.allow_threads(|| summarize_batch_json(json_input))
        .map_err(to_py_err)
}
