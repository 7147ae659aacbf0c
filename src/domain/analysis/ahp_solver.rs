//! AHP Solver - Normalized matrix and priority vector.

use serde::{Deserialize, Serialize};

use super::AnalysisError;
use crate::domain::matrix::PairwiseMatrix;

/// Output of [`AhpSolver::solve`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverResult {
    /// Column totals of the raw judgments.
    pub column_sums: Vec<f64>,
    /// Each cell divided by its column total; every column sums to 1.
    pub normalized: Vec<Vec<f64>>,
    /// Row averages of `normalized`; sums to 1.
    pub weights: Vec<f64>,
}

/// Priority vector derivation.
pub struct AhpSolver;

impl AhpSolver {
    /// Derives the priority (weight) vector of a complete matrix.
    ///
    /// # Algorithm
    /// Column normalization, then row averages. This approximates the
    /// principal eigenvector; it does not compute it exactly.
    /// 1. `column_sums[j] = Σ_i a[i][j]`
    /// 2. `normalized[i][j] = a[i][j] / column_sums[j]` (0 when the sum is 0)
    /// 3. `weights[i] = Σ_j normalized[i][j] / n`
    ///
    /// # Errors
    /// `IncompleteMatrix` if any off-diagonal cell is unset.
    pub fn solve(matrix: &PairwiseMatrix) -> Result<SolverResult, AnalysisError> {
        if !matrix.is_complete() {
            return Err(AnalysisError::IncompleteMatrix {
                missing: matrix.missing_count(),
            });
        }

        let n = matrix.size();

        let column_sums: Vec<f64> = (0..n)
            .map(|j| (0..n).map(|i| matrix.value(i, j)).sum())
            .collect();

        let normalized: Vec<Vec<f64>> = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        if column_sums[j] != 0.0 {
                            matrix.value(i, j) / column_sums[j]
                        } else {
                            0.0
                        }
                    })
                    .collect()
            })
            .collect();

        let weights = normalized
            .iter()
            .map(|row| row.iter().sum::<f64>() / n as f64)
            .collect();

        Ok(SolverResult {
            column_sums,
            normalized,
            weights,
        })
    }
}
