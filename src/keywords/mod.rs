//! Term statistics
//!
//! Document term frequencies and the salience of the top-K keywords.

pub mod frequency;
pub mod salience;

pub use frequency::TermFrequencyTable;
pub use salience::{top_keywords, KeywordScoreTable, DEFAULT_TOP_K};
