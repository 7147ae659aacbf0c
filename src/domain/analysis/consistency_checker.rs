//! Consistency Checker - Consistency ratio of a pairwise matrix.

use serde::{Deserialize, Serialize};

use super::AnalysisError;
use crate::domain::matrix::PairwiseMatrix;

/// Conventional AHP acceptability threshold for the consistency ratio.
pub const CONSISTENCY_THRESHOLD: f64 = 0.10;

/// Scale factor of the closed-form random index.
const RANDOM_INDEX_SCALE: f64 = 1.98;

/// Output of [`ConsistencyChecker::check`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyResult {
    /// Principal eigenvalue approximation.
    pub lambda_max: f64,
    /// CI = (λmax - n) / (n - 1).
    pub consistency_index: f64,
    /// RI for this matrix size.
    pub random_index: f64,
    /// CR = CI / RI, or 0 when RI is 0.
    pub consistency_ratio: f64,
    /// CR at or below the threshold.
    pub is_consistent: bool,
}

/// Consistency ratio computation.
pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// Checks how consistent the judgments of `matrix` are, given the weights
    /// derived from it.
    ///
    /// # Algorithm
    /// 1. `axp = A · w` using the raw (not normalized) matrix
    /// 2. `λmax = Σ axp[i]`
    /// 3. `CI = (λmax - n) / (n - 1)`
    /// 4. `RI = 1.98 (n - 2) / n` for n > 2, else 0
    /// 5. `CR = CI / RI`, or 0 when RI is 0
    ///
    /// λmax here is the plain sum of `A · w`, not the mean of `axp[i] / w[i]`.
    /// Results are calibrated against that sum.
    ///
    /// # Errors
    /// - `IncompleteMatrix` if any off-diagonal cell is unset
    /// - `TooSmall` for matrices smaller than 2x2
    /// - `DimensionMismatch` if `weights` does not match the matrix size
    pub fn check(
        matrix: &PairwiseMatrix,
        weights: &[f64],
        threshold: f64,
    ) -> Result<ConsistencyResult, AnalysisError> {
        if !matrix.is_complete() {
            return Err(AnalysisError::IncompleteMatrix {
                missing: matrix.missing_count(),
            });
        }

        let n = matrix.size();
        if n < 2 {
            return Err(AnalysisError::TooSmall { size: n });
        }
        if weights.len() != n {
            return Err(AnalysisError::DimensionMismatch {
                what: "weight vector",
                expected: n,
                actual: weights.len(),
            });
        }

        let axp: Vec<f64> = (0..n)
            .map(|i| (0..n).map(|j| matrix.value(i, j) * weights[j]).sum())
            .collect();

        let lambda_max: f64 = axp.iter().sum();
        let consistency_index = (lambda_max - n as f64) / (n as f64 - 1.0);
        let random_index = Self::random_index(n);
        let consistency_ratio = if random_index == 0.0 {
            0.0
        } else {
            consistency_index / random_index
        };

        Ok(ConsistencyResult {
            lambda_max,
            consistency_index,
            random_index,
            consistency_ratio,
            is_consistent: consistency_ratio <= threshold,
        })
    }

    /// Random index for an `n`x`n` matrix: `1.98 (n - 2) / n`, 0 for n <= 2.
    pub fn random_index(n: usize) -> f64 {
        if n > 2 {
            RANDOM_INDEX_SCALE * (n as f64 - 2.0) / n as f64
        } else {
            0.0
        }
    }
}
