//! Session-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::matrix::MatrixError;

/// Session-specific errors.
///
/// Malformed cell input is deliberately absent: it is ignored, not reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// An edit or rename was rejected by the matrix layer.
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// A stored snapshot disagrees with itself.
    #[error("Inconsistent session snapshot: {0}")]
    InconsistentSnapshot(String),
}

impl SessionError {
    pub fn inconsistent(reason: impl Into<String>) -> Self {
        SessionError::InconsistentSnapshot(reason.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::Matrix(err) => err.code(),
            SessionError::InconsistentSnapshot(_) => ErrorCode::InconsistentSnapshot,
        }
    }
}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
