//! Analysis-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Precondition violations when computing weights, consistency or rankings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The matrix still has unset off-diagonal cells.
    #[error("Matrix is incomplete: {missing} comparisons missing")]
    IncompleteMatrix { missing: usize },

    /// Consistency needs at least two entities.
    #[error("Matrix of size {size} is too small to check consistency")]
    TooSmall { size: usize },

    /// A vector's length does not match the matrix or entity count.
    #[error("{what} has length {actual}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

impl AnalysisError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AnalysisError::IncompleteMatrix { .. } => ErrorCode::IncompleteMatrix,
            AnalysisError::TooSmall { .. } => ErrorCode::MatrixTooSmall,
            AnalysisError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
        }
    }
}

impl From<AnalysisError> for DomainError {
    fn from(err: AnalysisError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
