//! Python bindings via PyO3
//!
//! This module provides the Python interface for rapid_textteaser.

pub mod json;
pub mod native;

use pyo3::prelude::*;

/// Register all Python classes and functions
pub fn register_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Version
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Native interface
    m.add_class::<native::PyScoredSentence>()?;
    m.add_class::<native::PySummary>()?;
    m.add_class::<native::PySummarizer>()?;
    m.add_function(wrap_pyfunction!(native::summarize, m)?)?;
    m.add_function(wrap_pyfunction!(native::get_stopwords, m)?)?;

    // JSON interface functions
    m.add_function(wrap_pyfunction!(json::summarize_from_json, m)?)?;
    m.add_function(wrap_pyfunction!(json::summarize_batch_from_json, m)?)?;

    Ok(())
}

/// Map library errors onto `ValueError`
pub(crate) fn to_py_err(err: crate::errors::SummarizerError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}
