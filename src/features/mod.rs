//! Sentence features
//!
//! Raw feature extraction (title overlap, length, position, SBS, DBS) and
//! their combination into a single ranking score.

pub mod combiner;
pub mod extractor;

pub use combiner::{ScoreCombiner, ScoreWeights};
pub use extractor::{DocumentContext, FeatureExtractor, IDEAL_LENGTH};
