//! Matrix Module - Pairwise comparison matrices and the labels that index them.
//!
//! # Components
//!
//! - `PairwiseMatrix` - Reciprocal comparison table; the only edit path keeps
//!   `cell[j][i] == 1 / cell[i][j]`
//! - `EntitySet` - Ordered criteria or alternative labels
//! - `AlternativeMatrices` - Lazily created per-criterion alternative matrices
//! - `resize` - Grow or shrink a matrix and its labels within bounds

mod alternative_matrices;
mod entity_set;
mod errors;
mod pairwise_matrix;
mod resize;

pub use alternative_matrices::AlternativeMatrices;
pub use entity_set::EntitySet;
pub use errors::MatrixError;
pub use pairwise_matrix::PairwiseMatrix;
pub use resize::{resize, SizeBounds, MIN_ENTITIES};
