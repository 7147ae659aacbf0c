//! Matrix Analysis - Weights and consistency of one matrix, computed together.

use serde::{Deserialize, Serialize};

use super::{AhpSolver, AnalysisError, ConsistencyChecker, ConsistencyResult, SolverResult};
use crate::domain::matrix::PairwiseMatrix;

/// Everything derived from a single complete pairwise matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixAnalysis {
    pub solver: SolverResult,
    pub consistency: ConsistencyResult,
}

impl MatrixAnalysis {
    /// Solves `matrix` and checks the resulting weights against `threshold`.
    pub fn run(matrix: &PairwiseMatrix, threshold: f64) -> Result<Self, AnalysisError> {
        let solver = AhpSolver::solve(matrix)?;
        let consistency = ConsistencyChecker::check(matrix, &solver.weights, threshold)?;
        Ok(Self {
            solver,
            consistency,
        })
    }

    /// Like [`MatrixAnalysis::run`], but `None` while the matrix is incomplete.
    pub fn run_if_complete(
        matrix: &PairwiseMatrix,
        threshold: f64,
    ) -> Result<Option<Self>, AnalysisError> {
        if !matrix.is_complete() {
            return Ok(None);
        }
        Self::run(matrix, threshold).map(Some)
    }

    pub fn weights(&self) -> &[f64] {
        &self.solver.weights
    }

    pub fn is_consistent(&self) -> bool {
        self.consistency.is_consistent
    }
}
