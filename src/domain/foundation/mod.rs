//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the AHP domain.

mod entity_kind;
mod errors;
mod judgment;

pub use entity_kind::EntityKind;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use judgment::{InputPolicy, Judgment};
