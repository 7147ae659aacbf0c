//! The two kinds of entities a pairwise matrix compares.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Criteria are weighed against each other once; alternatives are weighed
/// against each other once per criterion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Criterion,
    Alternative,
}

impl EntityKind {
    /// Returns the display label prefix.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Criterion => "Criterion",
            EntityKind::Alternative => "Alternative",
        }
    }

    /// Synthetic label for the entity at zero-based `index`, e.g. "Criterion 4".
    pub fn default_label(&self, index: usize) -> String {
        format!("{} {}", self.label(), index + 1)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
