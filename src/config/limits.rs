//! Entity count limits

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::matrix::{SizeBounds, MIN_ENTITIES};

/// How many criteria and alternatives a session may hold
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Smallest allowed criteria or alternative count
    #[serde(default = "default_min_entities")]
    pub min_entities: usize,

    /// Largest allowed criteria count
    #[serde(default = "default_max_criteria")]
    pub max_criteria: usize,

    /// Largest allowed alternative count
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: usize,

    /// Criteria count of a fresh session
    #[serde(default = "default_initial_count")]
    pub initial_criteria: usize,

    /// Alternative count of a fresh session
    #[serde(default = "default_initial_count")]
    pub initial_alternatives: usize,
}

impl LimitsConfig {
    /// Bounds applied when resizing the criteria set
    pub fn criteria_bounds(&self) -> SizeBounds {
        SizeBounds::new(self.min_entities, self.max_criteria)
    }

    /// Bounds applied when resizing the alternative set
    pub fn alternative_bounds(&self) -> SizeBounds {
        SizeBounds::new(self.min_entities, self.max_alternatives)
    }

    /// Validate limits configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.min_entities < MIN_ENTITIES {
            return Err(ValidationError::MinEntitiesTooSmall(self.min_entities));
        }
        for (kind, max, initial) in [
            ("criteria", self.max_criteria, self.initial_criteria),
            ("alternative", self.max_alternatives, self.initial_alternatives),
        ] {
            if max < self.min_entities {
                return Err(ValidationError::MaxBelowMin {
                    kind,
                    min: self.min_entities,
                    max,
                });
            }
            if initial < self.min_entities || initial > max {
                return Err(ValidationError::InitialCountOutOfRange {
                    kind,
                    count: initial,
                    min: self.min_entities,
                    max,
                });
            }
        }
        Ok(())
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            min_entities: default_min_entities(),
            max_criteria: default_max_criteria(),
            max_alternatives: default_max_alternatives(),
            initial_criteria: default_initial_count(),
            initial_alternatives: default_initial_count(),
        }
    }
}

fn default_min_entities() -> usize {
    MIN_ENTITIES
}

fn default_max_criteria() -> usize {
    10
}

fn default_max_alternatives() -> usize {
    15
}

fn default_initial_count() -> usize {
    3
}
