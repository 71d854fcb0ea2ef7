//! Score combination
//!
//! Merges the five raw features of a sentence into one scalar:
//!
//! ```text
//! keyword_frequency = (sbs + dbs) / 2 * 10
//! total = title * 1.5 + keyword_frequency * 2.0 + length * 0.5 + (position * 1.0) / 4.0
//! score = total * 10000
//! ```
//!
//! Only the position term is divided by 4.

use crate::errors::{Result, SummarizerError};
use crate::types::FeatureSet;
use serde::{Deserialize, Serialize};

/// Weights of the combined score. The defaults reproduce the reference
/// formula exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub title: f64,
    pub keyword_frequency: f64,
    pub length: f64,
    pub position: f64,
    /// Divisor applied to the position term only
    pub position_divisor: f64,
    /// Final multiplier
    pub scale: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            title: 1.5,
            keyword_frequency: 2.0,
            length: 0.5,
            position: 1.0,
            position_divisor: 4.0,
            scale: 10000.0,
        }
    }
}

impl ScoreWeights {
    pub fn validate(&self) -> Result<()> {
        let all = [
            ("title", self.title),
            ("keyword_frequency", self.keyword_frequency),
            ("length", self.length),
            ("position", self.position),
            ("position_divisor", self.position_divisor),
            ("scale", self.scale),
        ];
        if let Some((name, value)) = all.iter().find(|(_, v)| !v.is_finite()) {
            return Err(SummarizerError::invalid_config(format!(
                "weight {} must be finite, got {}",
                name, value
            )));
        }

        if self.position_divisor == 0.0 {
            return Err(SummarizerError::invalid_config(
                "position_divisor must be non-zero",
            ));
        }

        Ok(())
    }
}

/// Turns raw features into a ranked score
#[derive(Debug, Clone, Default)]
pub struct ScoreCombiner {
    weights: ScoreWeights,
}

impl ScoreCombiner {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Fill in `keyword_frequency` and `score` from the raw features
    pub fn combine(&self, features: FeatureSet) -> FeatureSet {
        let w = &self.weights;
        let keyword_frequency = (features.sbs + features.dbs) / 2.0 * 10.0;

        let total = (features.title * w.title)
            + (keyword_frequency * w.keyword_frequency)
            + (features.length * w.length)
            + (features.position * w.position) / w.position_divisor;

        FeatureSet {
            keyword_frequency,
            score: total * w.scale,
            ..features
        }
    }
}
