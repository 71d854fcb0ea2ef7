//! Sentence ranking
//!
//! Orders sentences by descending score, where two scores whose difference
//! rounds (half up) to zero compare equal. That relation is not transitive, so the
//! sort is a hand-written stable merge sort rather than `slice::sort_by`,
//! which may panic on comparators that are not a total order.

use crate::types::{FeatureSet, Sentence};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A sentence together with its memoized features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub features: FeatureSet,
}

impl ScoredSentence {
    pub fn score(&self) -> f64 {
        self.features.score
    }
}

/// Sorts scored sentences and keeps the best `limit`
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceRanker;

impl SentenceRanker {
    pub fn new() -> Self {
        Self
    }

    /// Descending comparator: `b - a`, rounded half up, decides; a rounded
    /// difference of zero is a tie.
    pub fn compare_scores(a: f64, b: f64) -> Ordering {
        // Half up, not half away from zero: -0.5 rounds to 0
        let diff = (b - a + 0.5).floor();
        if diff > 0.0 {
            Ordering::Greater
        } else if diff < 0.0 {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }

    /// Stable sort by [`Self::compare_scores`], then truncate to `limit`.
    /// Ties keep document order.
    pub fn rank(&self, scored: Vec<ScoredSentence>, limit: usize) -> Vec<ScoredSentence> {
        let mut ranked = merge_sort(scored, &mut |a: &ScoredSentence, b: &ScoredSentence| {
            Self::compare_scores(a.score(), b.score())
        });
        ranked.truncate(limit);
        ranked
    }
}

fn merge_sort<T, F>(mut items: Vec<T>, cmp: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, cmp);
    let right = merge_sort(right, cmp);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        // Right side wins only when strictly smaller
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(index: usize, score: f64) -> ScoredSentence {
        ScoredSentence {
            sentence: Sentence::new(format!("s{}", index), index, vec![]),
            features: FeatureSet {
                score,
                ..FeatureSet::default()
            },
        }
    }

    fn order(ranked: &[ScoredSentence]) -> Vec<usize> {
        ranked.iter().map(|s| s.sentence.index).collect()
    }

    #[test]
    fn test_compare_scores() {
        assert_eq!(SentenceRanker::compare_scores(1.0, 5.0), Ordering::Greater);
        assert_eq!(SentenceRanker::compare_scores(5.0, 1.0), Ordering::Less);
        assert_eq!(SentenceRanker::compare_scores(1.0, 1.4), Ordering::Equal);
        assert_eq!(SentenceRanker::compare_scores(1.0, 1.6), Ordering::Greater);
    }

    #[test]
    fn test_half_differences_round_up() {
        assert_eq!(SentenceRanker::compare_scores(100.0, 100.5), Ordering::Greater);
        assert_eq!(SentenceRanker::compare_scores(100.5, 100.0), Ordering::Equal);

        // The later sentence is only half a point ahead, so document order holds
        let ranked = SentenceRanker::new().rank(vec![scored(0, 100.0), scored(1, 100.5)], 2);
        assert_eq!(order(&ranked), vec![0, 1]);
    }

    #[test]
    fn test_descending_order() {
        let input = vec![scored(0, 10.0), scored(1, 30.0), scored(2, 20.0)];
        let ranked = SentenceRanker::new().rank(input, 10);
        assert_eq!(order(&ranked), vec![1, 2, 0]);
    }

    #[test]
    fn test_rounded_ties_keep_document_order() {
        let input = vec![
            scored(0, 100.2),
            scored(1, 100.0),
            scored(2, 500.0),
            scored(3, 100.4),
        ];
        let ranked = SentenceRanker::new().rank(input, 10);
        assert_eq!(order(&ranked), vec![2, 0, 1, 3]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let input = (0..5).map(|i| scored(i, i as f64 * 10.0)).collect();
        let ranked = SentenceRanker::new().rank(input, 2);
        assert_eq!(order(&ranked), vec![4, 3]);

        let input = vec![scored(0, 1.0)];
        assert_eq!(SentenceRanker::new().rank(input, 5).len(), 1);
        assert!(SentenceRanker::new().rank(Vec::new(), 3).is_empty());
    }

    #[test]
    fn test_non_transitive_scores_do_not_panic() {
        // 0.0 ~ 0.4 ~ 0.8 ~ 1.2 but 0.0 < 1.2 once rounded
        let input: Vec<_> = (0..40).map(|i| scored(i, (i % 4) as f64 * 0.4)).collect();
        let ranked = SentenceRanker::new().rank(input, 40);
        assert_eq!(ranked.len(), 40);
    }
}
