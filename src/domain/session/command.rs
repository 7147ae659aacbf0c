//! Session commands - the discrete intents a grid UI dispatches.

use serde::{Deserialize, Serialize};

/// One user intent against an [`AhpSession`](super::AhpSession).
///
/// Cell values arrive as the raw text typed into the grid and are parsed
/// under the configured input policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AhpCommand {
    /// Grow or shrink the criteria set; clamped to the configured bounds.
    SetCriteriaCount { count: usize },
    /// Grow or shrink the alternative set; clamped to the configured bounds.
    SetAlternativeCount { count: usize },
    RenameCriterion { index: usize, name: String },
    RenameAlternative { index: usize, name: String },
    /// Edit a criteria comparison.
    SetCriteriaCell { row: usize, col: usize, input: String },
    /// Edit an alternative comparison under `criterion`.
    SetAlternativeCell {
        criterion: usize,
        row: usize,
        col: usize,
        input: String,
    },
    /// Start over from the initial session.
    Reset,
}

impl AhpCommand {
    /// Returns the command name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            AhpCommand::SetCriteriaCount { .. } => "set_criteria_count",
            AhpCommand::SetAlternativeCount { .. } => "set_alternative_count",
            AhpCommand::RenameCriterion { .. } => "rename_criterion",
            AhpCommand::RenameAlternative { .. } => "rename_alternative",
            AhpCommand::SetCriteriaCell { .. } => "set_criteria_cell",
            AhpCommand::SetAlternativeCell { .. } => "set_alternative_cell",
            AhpCommand::Reset => "reset",
        }
    }
}
