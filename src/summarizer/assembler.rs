//! Summary assembly

use super::ranker::ScoredSentence;
use crate::types::DEFAULT_DELIMITER;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selected sentences in ranked order, plus the delimiter that joins them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub sentences: Vec<ScoredSentence>,
    pub delimiter: String,
}

impl Summary {
    /// Each sentence's text followed by the delimiter, the last one included
    pub fn render(&self) -> String {
        let capacity = self
            .sentences
            .iter()
            .map(|s| s.sentence.text.len() + self.delimiter.len())
            .sum();
        let mut out = String::with_capacity(capacity);
        for scored in &self.sentences {
            out.push_str(&scored.sentence.text);
            out.push_str(&self.delimiter);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Document indices of the selected sentences, in ranked order
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.sentence.index).collect()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for scored in &self.sentences {
            write!(f, "{}{}", scored.sentence.text, self.delimiter)?;
        }
        Ok(())
    }
}

/// Wraps ranked sentences into a [`Summary`]
#[derive(Debug, Clone)]
pub struct SummaryAssembler {
    delimiter: String,
}

impl Default for SummaryAssembler {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITER)
    }
}

impl SummaryAssembler {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    pub fn assemble(&self, ranked: Vec<ScoredSentence>) -> Summary {
        Summary {
            sentences: ranked,
            delimiter: self.delimiter.clone(),
        }
    }
}
