//! Alternative Matrices - One alternative-comparison matrix per criterion.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{MatrixError, PairwiseMatrix};
use crate::domain::foundation::Judgment;

/// Sparse mapping from criterion index to the matrix comparing alternatives
/// under that criterion.
///
/// A criterion has no entry until one of its cells is first edited. An absent
/// entry contributes nothing to the final ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlternativeMatrices {
    by_criterion: BTreeMap<usize, PairwiseMatrix>,
}

impl AlternativeMatrices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the matrix for `criterion`, if one was ever edited.
    pub fn get(&self, criterion: usize) -> Option<&PairwiseMatrix> {
        self.by_criterion.get(&criterion)
    }

    /// Edits a cell under `criterion`, creating an `alternative_count`-sized
    /// matrix first if the criterion has none.
    ///
    /// Nothing is created when the edit itself is rejected.
    pub fn set_cell(
        &mut self,
        criterion: usize,
        alternative_count: usize,
        row: usize,
        col: usize,
        judgment: Judgment,
    ) -> Result<(), MatrixError> {
        let mut matrix = self
            .by_criterion
            .get(&criterion)
            .cloned()
            .unwrap_or_else(|| PairwiseMatrix::new(alternative_count));
        matrix.set_cell(row, col, judgment)?;
        self.by_criterion.insert(criterion, matrix);
        Ok(())
    }

    /// True iff `criterion` has a matrix and it is complete.
    pub fn is_complete_for(&self, criterion: usize) -> bool {
        self.get(criterion).is_some_and(PairwiseMatrix::is_complete)
    }

    /// True iff every criterion in `0..criteria_count` has a complete matrix.
    pub fn all_complete(&self, criteria_count: usize) -> bool {
        (0..criteria_count).all(|c| self.is_complete_for(c))
    }

    /// Drops matrices for criteria at or beyond `criteria_count`.
    pub fn retain_criteria(&mut self, criteria_count: usize) {
        self.by_criterion.retain(|&criterion, _| criterion < criteria_count);
    }

    /// Discards every matrix.
    pub fn clear(&mut self) {
        self.by_criterion.clear();
    }

    pub fn len(&self) -> usize {
        self.by_criterion.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_criterion.is_empty()
    }

    /// Iterates `(criterion, matrix)` in criterion order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PairwiseMatrix)> {
        self.by_criterion.iter().map(|(&c, m)| (c, m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_created_lazily_on_first_edit() {
        let mut matrices = AlternativeMatrices::new();
        assert!(matrices.get(1).is_none());

        matrices.set_cell(1, 4, 0, 3, Judgment::Value(6.0)).unwrap();

        let matrix = matrices.get(1).unwrap();
        assert_eq!(matrix.size(), 4);
        assert_eq!(matrix.get(3, 0), Some(Judgment::Value(1.0 / 6.0)));
        assert!(matrices.get(0).is_none());
    }

    #[test]
    fn rejected_edit_creates_nothing() {
        let mut matrices = AlternativeMatrices::new();
        let result = matrices.set_cell(0, 3, 2, 2, Judgment::Value(2.0));

        assert!(result.is_err());
        assert!(matrices.is_empty());
    }

    #[test]
    fn later_edits_reuse_existing_matrix() {
        let mut matrices = AlternativeMatrices::new();
        matrices.set_cell(0, 2, 0, 1, Judgment::Value(2.0)).unwrap();
        matrices.set_cell(0, 2, 0, 1, Judgment::Value(9.0)).unwrap();

        assert_eq!(matrices.len(), 1);
        assert_eq!(matrices.get(0).unwrap().get(1, 0), Some(Judgment::Value(1.0 / 9.0)));
    }

    #[test]
    fn all_complete_requires_every_criterion() {
        let mut matrices = AlternativeMatrices::new();
        matrices.set_cell(0, 2, 0, 1, Judgment::Value(2.0)).unwrap();
        assert!(matrices.is_complete_for(0));
        assert!(!matrices.all_complete(2));

        matrices.set_cell(1, 2, 1, 0, Judgment::Value(3.0)).unwrap();
        assert!(matrices.all_complete(2));
    }

    #[test]
    fn retain_criteria_drops_trailing_entries() {
        let mut matrices = AlternativeMatrices::new();
        for criterion in 0..4 {
            matrices.set_cell(criterion, 2, 0, 1, Judgment::Value(2.0)).unwrap();
        }

        matrices.retain_criteria(2);
        let kept: Vec<usize> = matrices.iter().map(|(c, _)| c).collect();
        assert_eq!(kept, vec![0, 1]);
    }

    #[test]
    fn serializes_as_map_keyed_by_criterion() {
        let mut matrices = AlternativeMatrices::new();
        matrices.set_cell(2, 2, 0, 1, Judgment::Value(4.0)).unwrap();

        let json = serde_json::to_string(&matrices).unwrap();
        assert_eq!(json, r#"{"2":[[1.0,4.0],[0.25,1.0]]}"#);

        let back: AlternativeMatrices = serde_json::from_str(&json).unwrap();
        assert_eq!(back, matrices);
    }
}
