//! Natural Language Processing components
//!
//! This module provides language resolution, stopword tables and
//! tokenization.

pub mod language;
pub mod stopwords;
pub mod tokenizer;
