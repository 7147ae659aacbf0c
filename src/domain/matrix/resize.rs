//! Resizing a labelled matrix within configured bounds.

use serde::{Deserialize, Serialize};

use super::{EntitySet, PairwiseMatrix};

/// Fewest criteria or alternatives a comparison can hold.
pub const MIN_ENTITIES: usize = 2;

/// Inclusive range of allowed entity counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBounds {
    pub min: usize,
    pub max: usize,
}

impl SizeBounds {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Clamps `requested` into `[min, max]`.
    pub fn clamp(&self, requested: usize) -> usize {
        requested.max(self.min).min(self.max)
    }
}

/// Resizes a matrix together with its labels.
///
/// `requested` is clamped to `bounds`. Rows and columns shared by the old
/// and new size keep their data; new labels are synthetic and new cells
/// start unset.
pub fn resize(
    matrix: &PairwiseMatrix,
    labels: &EntitySet,
    requested: usize,
    bounds: SizeBounds,
) -> (PairwiseMatrix, EntitySet) {
    let count = bounds.clamp(requested);
    (matrix.resized(count), labels.resized(count))
}
