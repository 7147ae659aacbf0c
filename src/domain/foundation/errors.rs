//! Error types for the domain layer.

use serde::Serialize;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        actual: f64,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, actual: f64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Matrix errors
    InvalidMatrix,
    DiagonalNotEditable,
    IndexOutOfBounds,
    MatrixTooSmall,

    // Analysis errors
    IncompleteMatrix,
    DimensionMismatch,

    // Session errors
    CriterionNotFound,
    AlternativeNotFound,
    InconsistentSnapshot,

    // Storage errors
    SnapshotUnreadable,
    UnsupportedFormat,
    SerializationFailed,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::InvalidMatrix => "INVALID_MATRIX",
            ErrorCode::DiagonalNotEditable => "DIAGONAL_NOT_EDITABLE",
            ErrorCode::IndexOutOfBounds => "INDEX_OUT_OF_BOUNDS",
            ErrorCode::MatrixTooSmall => "MATRIX_TOO_SMALL",
            ErrorCode::IncompleteMatrix => "INCOMPLETE_MATRIX",
            ErrorCode::DimensionMismatch => "DIMENSION_MISMATCH",
            ErrorCode::CriterionNotFound => "CRITERION_NOT_FOUND",
            ErrorCode::AlternativeNotFound => "ALTERNATIVE_NOT_FOUND",
            ErrorCode::InconsistentSnapshot => "INCONSISTENT_SNAPSHOT",
            ErrorCode::SnapshotUnreadable => "SNAPSHOT_UNREADABLE",
            ErrorCode::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            ErrorCode::SerializationFailed => "SERIALIZATION_FAILED",
        };
        write!(f, "{}", s)
    }
}

/// Coded error reported at the edge of the crate.
///
/// Module errors keep their own variants; they collapse into this only
/// when leaving the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
}

impl DomainError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}
