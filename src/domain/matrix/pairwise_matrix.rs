//! Pairwise Matrix - Square table of reciprocal comparisons.

use serde::{Deserialize, Serialize};

use super::MatrixError;
use crate::domain::foundation::Judgment;

/// Relative tolerance when checking mirrored cells on deserialization.
const RECIPROCAL_TOLERANCE: f64 = 1e-9;

/// A square table where `cell[i][j]` says how strongly entity `i` is
/// preferred over entity `j`.
///
/// # Invariants
/// - The diagonal is always 1.
/// - If `cell[i][j]` is set, `cell[j][i] == 1 / cell[i][j]`; if it is unset,
///   so is its mirror.
///
/// Both hold after every call to [`PairwiseMatrix::set_cell`], which is the
/// only way to edit a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Judgment>>", into = "Vec<Vec<Judgment>>")]
pub struct PairwiseMatrix {
    cells: Vec<Vec<Judgment>>,
}

impl PairwiseMatrix {
    /// Creates an `size`x`size` matrix with a diagonal of 1 and every other
    /// cell unset.
    pub fn new(size: usize) -> Self {
        let cells = (0..size)
            .map(|i| {
                (0..size)
                    .map(|j| if i == j { Judgment::EQUAL } else { Judgment::Unset })
                    .collect()
            })
            .collect();
        Self { cells }
    }

    /// Returns the number of entities compared.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Returns the cell at `(row, col)`, if it exists.
    pub fn get(&self, row: usize, col: usize) -> Option<Judgment> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Returns the numeric value at `(row, col)`, unset and out of range as 0.
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.get(row, col).map(|j| j.value_or_zero()).unwrap_or(0.0)
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<Judgment>] {
        &self.cells
    }

    /// Sets `cell[row][col]` and its reciprocal in one step.
    ///
    /// Setting `Unset` clears the mirrored cell too.
    ///
    /// # Errors
    /// - `IndexOutOfBounds` if either coordinate is outside the matrix
    /// - `DiagonalNotEditable` if `row == col`
    pub fn set_cell(&mut self, row: usize, col: usize, judgment: Judgment) -> Result<(), MatrixError> {
        let size = self.size();
        if row >= size || col >= size {
            return Err(MatrixError::IndexOutOfBounds { row, col, size });
        }
        if row == col {
            return Err(MatrixError::DiagonalNotEditable { index: row });
        }

        self.cells[row][col] = judgment;
        self.cells[col][row] = judgment.reciprocal();
        Ok(())
    }

    /// Returns a copy with `cell[row][col]` set; see [`PairwiseMatrix::set_cell`].
    pub fn with_cell(&self, row: usize, col: usize, judgment: Judgment) -> Result<Self, MatrixError> {
        let mut next = self.clone();
        next.set_cell(row, col, judgment)?;
        Ok(next)
    }

    /// Counts off-diagonal cells that are still unset.
    pub fn missing_count(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().filter(move |(j, _)| i != *j))
            .filter(|(_, cell)| !cell.is_set())
            .count()
    }

    /// True iff the matrix is non-empty and every off-diagonal cell is set.
    ///
    /// Completeness gates every downstream computation.
    pub fn is_complete(&self) -> bool {
        self.size() > 0 && self.missing_count() == 0
    }

    /// Returns a `new_size`x`new_size` copy.
    ///
    /// The top-left block shared by both sizes is kept as is; new cells are
    /// unset except for the diagonal.
    pub fn resized(&self, new_size: usize) -> Self {
        let mut next = Self::new(new_size);
        let shared = self.size().min(new_size);
        for i in 0..shared {
            for j in 0..shared {
                next.cells[i][j] = self.cells[i][j];
            }
        }
        next
    }
}

impl TryFrom<Vec<Vec<Judgment>>> for PairwiseMatrix {
    type Error = MatrixError;

    fn try_from(cells: Vec<Vec<Judgment>>) -> Result<Self, Self::Error> {
        let size = cells.len();
        for (row, cells_in_row) in cells.iter().enumerate() {
            if cells_in_row.len() != size {
                return Err(MatrixError::NotSquare {
                    row,
                    len: cells_in_row.len(),
                    size,
                });
            }
        }

        for i in 0..size {
            if cells[i][i] != Judgment::EQUAL {
                return Err(MatrixError::DiagonalNotOne { index: i });
            }
            for j in (i + 1)..size {
                let reciprocal = match (cells[i][j], cells[j][i]) {
                    (Judgment::Unset, Judgment::Unset) => true,
                    (Judgment::Value(a), Judgment::Value(b)) => {
                        (a * b - 1.0).abs() <= RECIPROCAL_TOLERANCE
                    }
                    _ => false,
                };
                if !reciprocal {
                    return Err(MatrixError::NotReciprocal { row: i, col: j });
                }
            }
        }

        Ok(Self { cells })
    }
}

impl From<PairwiseMatrix> for Vec<Vec<Judgment>> {
    fn from(matrix: PairwiseMatrix) -> Self {
        matrix.cells
    }
}
