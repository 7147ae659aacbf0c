//! AHP session snapshot.
//!
//! A session holds everything a user has entered: criteria and alternative
//! labels, the criteria comparison matrix, and one alternative comparison
//! matrix per criterion.
//!
//! # Snapshots
//!
//! Sessions are values. [`AhpSession::apply`] never mutates its receiver; it
//! returns the next snapshot, which the owner stores as the new source of
//! truth. One command is applied at a time.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AhpCommand, SessionError};
use crate::config::{AppConfig, LimitsConfig};
use crate::domain::foundation::{EntityKind, InputPolicy, Judgment};
use crate::domain::matrix::{
    resize, AlternativeMatrices, EntitySet, MatrixError, PairwiseMatrix, MIN_ENTITIES,
};

/// Everything entered for one AHP decision.
///
/// # Invariants
///
/// - `criteria_matrix` is `criteria.len()` square
/// - every alternative matrix is `alternatives.len()` square
/// - alternative matrices exist only for criteria indices below `criteria.len()`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SessionSnapshot")]
pub struct AhpSession {
    criteria: EntitySet,
    alternatives: EntitySet,
    criteria_matrix: PairwiseMatrix,
    alternative_matrices: AlternativeMatrices,
}

/// Unchecked wire form of [`AhpSession`].
#[derive(Deserialize)]
struct SessionSnapshot {
    criteria: EntitySet,
    alternatives: EntitySet,
    criteria_matrix: PairwiseMatrix,
    #[serde(default)]
    alternative_matrices: AlternativeMatrices,
}

impl AhpSession {
    /// Creates the initial session: default-labelled criteria and alternatives,
    /// no comparisons entered.
    pub fn new(limits: &LimitsConfig) -> Self {
        Self {
            criteria: EntitySet::with_default_labels(EntityKind::Criterion, limits.initial_criteria),
            alternatives: EntitySet::with_default_labels(
                EntityKind::Alternative,
                limits.initial_alternatives,
            ),
            criteria_matrix: PairwiseMatrix::new(limits.initial_criteria),
            alternative_matrices: AlternativeMatrices::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn criteria(&self) -> &EntitySet {
        &self.criteria
    }

    pub fn alternatives(&self) -> &EntitySet {
        &self.alternatives
    }

    pub fn criteria_matrix(&self) -> &PairwiseMatrix {
        &self.criteria_matrix
    }

    pub fn alternative_matrices(&self) -> &AlternativeMatrices {
        &self.alternative_matrices
    }

    /// Returns the alternative matrix for `criterion`, if one was ever edited.
    pub fn alternative_matrix(&self, criterion: usize) -> Option<&PairwiseMatrix> {
        self.alternative_matrices.get(criterion)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Commands
    // ─────────────────────────────────────────────────────────────────────────

    /// Applies `command` and returns the resulting snapshot.
    ///
    /// Cell input that fails the configured literal policy is ignored: the
    /// returned snapshot equals `self`.
    ///
    /// # Errors
    ///
    /// - `Matrix(EntityNotFound)` for renames or alternative edits naming an
    ///   unknown criterion/alternative
    /// - `Matrix(DiagonalNotEditable)` / `Matrix(IndexOutOfBounds)` for bad cells
    pub fn apply(&self, command: &AhpCommand, config: &AppConfig) -> Result<Self, SessionError> {
        let mut next = self.clone();
        let policy = config.analysis.input_policy;

        match command {
            AhpCommand::SetCriteriaCount { count } => {
                let (matrix, labels) = resize(
                    &self.criteria_matrix,
                    &self.criteria,
                    *count,
                    config.limits.criteria_bounds(),
                );
                next.alternative_matrices.retain_criteria(labels.len());
                debug!(
                    requested = count,
                    from = self.criteria.len(),
                    to = labels.len(),
                    "Resized criteria"
                );
                next.criteria_matrix = matrix;
                next.criteria = labels;
            }
            AhpCommand::SetAlternativeCount { count } => {
                let clamped = config.limits.alternative_bounds().clamp(*count);
                if clamped != self.alternatives.len() {
                    next.alternatives = self.alternatives.resized(clamped);
                    next.alternative_matrices.clear();
                    debug!(
                        requested = count,
                        from = self.alternatives.len(),
                        to = clamped,
                        "Resized alternatives, discarded alternative matrices"
                    );
                }
            }
            AhpCommand::RenameCriterion { index, name } => {
                next.criteria.rename(*index, name.as_str())?;
            }
            AhpCommand::RenameAlternative { index, name } => {
                next.alternatives.rename(*index, name.as_str())?;
            }
            AhpCommand::SetCriteriaCell { row, col, input } => {
                if let Some(judgment) = Self::parse_cell(input, policy, command) {
                    next.criteria_matrix.set_cell(*row, *col, judgment)?;
                }
            }
            AhpCommand::SetAlternativeCell {
                criterion,
                row,
                col,
                input,
            } => {
                if *criterion >= self.criteria.len() {
                    return Err(MatrixError::EntityNotFound {
                        kind: EntityKind::Criterion,
                        index: *criterion,
                        count: self.criteria.len(),
                    }
                    .into());
                }
                if let Some(judgment) = Self::parse_cell(input, policy, command) {
                    next.alternative_matrices.set_cell(
                        *criterion,
                        self.alternatives.len(),
                        *row,
                        *col,
                        judgment,
                    )?;
                }
            }
            AhpCommand::Reset => {
                next = Self::new(&config.limits);
            }
        }

        Ok(next)
    }

    /// Parses grid input; `None` means "ignore this keystroke".
    fn parse_cell(input: &str, policy: InputPolicy, command: &AhpCommand) -> Option<Judgment> {
        match Judgment::parse_input(input, policy) {
            Ok(judgment) => Some(judgment),
            Err(err) => {
                debug!(command = command.name(), input, error = %err, "Ignored cell input");
                None
            }
        }
    }
}

impl TryFrom<SessionSnapshot> for AhpSession {
    type Error = SessionError;

    fn try_from(snapshot: SessionSnapshot) -> Result<Self, Self::Error> {
        if snapshot.criteria.kind() != EntityKind::Criterion
            || snapshot.alternatives.kind() != EntityKind::Alternative
        {
            return Err(SessionError::inconsistent("entity kinds are swapped"));
        }

        let criteria_count = snapshot.criteria.len();
        let alternative_count = snapshot.alternatives.len();

        for set in [&snapshot.criteria, &snapshot.alternatives] {
            if set.len() < MIN_ENTITIES {
                return Err(SessionError::inconsistent(format!(
                    "{} count {} is below the minimum of {}",
                    set.kind(),
                    set.len(),
                    MIN_ENTITIES
                )));
            }
        }

        if snapshot.criteria_matrix.size() != criteria_count {
            return Err(SessionError::inconsistent(format!(
                "criteria matrix is {0}x{0} but there are {1} criteria",
                snapshot.criteria_matrix.size(),
                criteria_count
            )));
        }

        for (criterion, matrix) in snapshot.alternative_matrices.iter() {
            if criterion >= criteria_count {
                return Err(SessionError::inconsistent(format!(
                    "alternative matrix for unknown criterion {}",
                    criterion
                )));
            }
            if matrix.size() != alternative_count {
                return Err(SessionError::inconsistent(format!(
                    "alternative matrix for criterion {0} is {1}x{1} but there are {2} alternatives",
                    criterion,
                    matrix.size(),
                    alternative_count
                )));
            }
        }

        Ok(Self {
            criteria: snapshot.criteria,
            alternatives: snapshot.alternatives,
            criteria_matrix: snapshot.criteria_matrix,
            alternative_matrices: snapshot.alternative_matrices,
        })
    }
}
