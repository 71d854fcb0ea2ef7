//! Summarization components
//!
//! Ranks memoized sentence scores and assembles the selected sentences into
//! a summary.

pub mod assembler;
pub mod ranker;
pub mod runner;

pub use assembler::{Summary, SummaryAssembler};
pub use ranker::{ScoredSentence, SentenceRanker};
pub use runner::Summarizer;
