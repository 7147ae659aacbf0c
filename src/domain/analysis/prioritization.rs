//! Prioritization Aggregator - Weighted-sum synthesis of the final ranking.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::AnalysisError;

/// Final alternative scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prioritization {
    /// Score per alternative, in alternative order.
    pub final_scores: Vec<f64>,
    /// Highest score, 0 when there are no alternatives.
    pub max_score: f64,
}

impl Prioritization {
    /// True iff alternative `index` ties for the top score and that score is
    /// positive.
    pub fn is_best(&self, index: usize) -> bool {
        self.max_score > 0.0
            && self
                .final_scores
                .get(index)
                .is_some_and(|&score| score == self.max_score)
    }

    /// Indices of every alternative tied for the top score.
    pub fn best_indices(&self) -> Vec<usize> {
        (0..self.final_scores.len())
            .filter(|&i| self.is_best(i))
            .collect()
    }

    /// First alternative with the top score, if any is best.
    pub fn best_index(&self) -> Option<usize> {
        (0..self.final_scores.len()).find(|&i| self.is_best(i))
    }
}

/// Combines criteria weights with per-criterion alternative weights.
pub struct PrioritizationAggregator;

impl PrioritizationAggregator {
    /// Computes `score[a] = Σ_c criteria_weights[c] · alternative_weights[c][a]`.
    ///
    /// No consistency gating happens here: callers pass weights from complete
    /// matrices, consistent or not.
    ///
    /// # Edge Cases
    /// - Criterion with no entry: contributes 0 to every alternative
    /// - Entries keyed beyond `criteria_weights`: ignored
    /// - No alternatives: empty scores, max 0
    ///
    /// # Errors
    /// `DimensionMismatch` if an entry's length differs from `alternative_count`.
    pub fn aggregate(
        criteria_weights: &[f64],
        alternative_weights: &BTreeMap<usize, Vec<f64>>,
        alternative_count: usize,
    ) -> Result<Prioritization, AnalysisError> {
        let mut final_scores = vec![0.0; alternative_count];

        for (criterion, &criterion_weight) in criteria_weights.iter().enumerate() {
            let Some(weights) = alternative_weights.get(&criterion) else {
                continue;
            };
            if weights.len() != alternative_count {
                return Err(AnalysisError::DimensionMismatch {
                    what: "alternative weight vector",
                    expected: alternative_count,
                    actual: weights.len(),
                });
            }
            for (score, weight) in final_scores.iter_mut().zip(weights) {
                *score += criterion_weight * weight;
            }
        }

        let max_score = final_scores
            .iter()
            .copied()
            .reduce(f64::max)
            .unwrap_or(0.0);

        Ok(Prioritization {
            final_scores,
            max_score,
        })
    }
}
