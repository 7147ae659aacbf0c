//! Matrix-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, EntityKind, ErrorCode};

/// Errors raised when editing or building a pairwise comparison matrix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Diagonal cells are fixed at 1.
    #[error("Diagonal cell ({index}, {index}) cannot be edited")]
    DiagonalNotEditable { index: usize },

    /// Cell coordinates fall outside the matrix.
    #[error("Cell ({row}, {col}) is outside a {size}x{size} matrix")]
    IndexOutOfBounds { row: usize, col: usize, size: usize },

    /// Entity index falls outside the label set.
    #[error("{kind} {index} does not exist (have {count})")]
    EntityNotFound {
        kind: EntityKind,
        index: usize,
        count: usize,
    },

    /// Rows are missing or have the wrong length.
    #[error("Matrix is not square: row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    /// A diagonal cell holds something other than 1.
    #[error("Diagonal cell ({index}, {index}) must be 1")]
    DiagonalNotOne { index: usize },

    /// Mirrored cells are not reciprocal.
    #[error("Cells ({row}, {col}) and ({col}, {row}) are not reciprocal")]
    NotReciprocal { row: usize, col: usize },
}

impl MatrixError {
    pub fn code(&self) -> ErrorCode {
        match self {
            MatrixError::DiagonalNotEditable { .. } => ErrorCode::DiagonalNotEditable,
            MatrixError::IndexOutOfBounds { .. } => ErrorCode::IndexOutOfBounds,
            MatrixError::EntityNotFound {
                kind: EntityKind::Criterion,
                ..
            } => ErrorCode::CriterionNotFound,
            MatrixError::EntityNotFound {
                kind: EntityKind::Alternative,
                ..
            } => ErrorCode::AlternativeNotFound,
            MatrixError::NotSquare { .. }
            | MatrixError::DiagonalNotOne { .. }
            | MatrixError::NotReciprocal { .. } => ErrorCode::InvalidMatrix,
        }
    }
}

impl From<MatrixError> for DomainError {
    fn from(err: MatrixError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_not_found_maps_to_kind_specific_code() {
        let err = MatrixError::EntityNotFound {
            kind: EntityKind::Alternative,
            index: 7,
            count: 3,
        };
        assert_eq!(err.code(), ErrorCode::AlternativeNotFound);
        assert_eq!(err.to_string(), "Alternative 7 does not exist (have 3)");
    }

    #[test]
    fn converts_to_domain_error() {
        let err: DomainError = MatrixError::DiagonalNotEditable { index: 2 }.into();
        assert_eq!(err.code, ErrorCode::DiagonalNotEditable);
        assert_eq!(err.message, "Diagonal cell (2, 2) cannot be edited");
    }
}
