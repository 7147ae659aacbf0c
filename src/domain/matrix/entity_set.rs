//! Entity Set - Ordered labels naming the rows and columns of a matrix.

use serde::{Deserialize, Serialize};

use super::MatrixError;
use crate::domain::foundation::EntityKind;

/// Ordered labels for criteria or alternatives.
///
/// Position is identity: matrix row `i` belongs to `labels[i]`. Labels are
/// free text and need not be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet {
    kind: EntityKind,
    labels: Vec<String>,
}

impl EntitySet {
    /// Creates `count` entities labelled "Criterion 1", "Criterion 2", ...
    pub fn with_default_labels(kind: EntityKind, count: usize) -> Self {
        Self {
            kind,
            labels: (0..count).map(|i| kind.default_label(i)).collect(),
        }
    }

    /// Creates a set from explicit labels.
    pub fn from_labels(kind: EntityKind, labels: Vec<impl Into<String>>) -> Self {
        Self {
            kind,
            labels: labels.into_iter().map(|s| s.into()).collect(),
        }
    }

    /// Returns what these entities are.
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Returns the labels in order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns the label at `index`.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Replaces the label at `index`. Order and matrix data are unaffected.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> Result<(), MatrixError> {
        let count = self.len();
        let label = self.labels.get_mut(index).ok_or(MatrixError::EntityNotFound {
            kind: self.kind,
            index,
            count,
        })?;
        *label = name.into();
        Ok(())
    }

    /// Returns a copy with exactly `count` labels.
    ///
    /// Shrinking truncates; growing appends synthetic labels numbered from
    /// the current length.
    pub fn resized(&self, count: usize) -> Self {
        let mut labels: Vec<String> = self.labels.iter().take(count).cloned().collect();
        labels.extend((labels.len()..count).map(|i| self.kind.default_label(i)));
        Self {
            kind: self.kind,
            labels,
        }
    }
}
