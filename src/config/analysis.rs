//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::CONSISTENCY_THRESHOLD;
use crate::domain::foundation::InputPolicy;

/// Settings for consistency verdicts and cell input parsing
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Largest consistency ratio still considered acceptable
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Which literals a grid cell accepts
    #[serde(default)]
    pub input_policy: InputPolicy,
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let threshold = self.consistency_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ValidationError::InvalidConsistencyThreshold(threshold));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
            input_policy: InputPolicy::default(),
        }
    }
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_defaults() {
        let analysis = AnalysisConfig::default();
        assert_eq!(analysis.consistency_threshold, 0.10);
        assert_eq!(analysis.input_policy, InputPolicy::SingleDigit);
        assert!(analysis.validate().is_ok());
    }

    #[test]
    fn test_threshold_must_be_positive() {
        let analysis = AnalysisConfig {
            consistency_threshold: 0.0,
            ..AnalysisConfig::default()
        };
        assert_eq!(
            analysis.validate(),
            Err(ValidationError::InvalidConsistencyThreshold(0.0))
        );
    }

    #[test]
    fn test_threshold_nan_rejected() {
        let analysis = AnalysisConfig {
            consistency_threshold: f64::NAN,
            ..AnalysisConfig::default()
        };
        assert!(analysis.validate().is_err());
    }

    #[test]
    fn test_analysis_deserialization() {
        let json = r#"{
            "consistency_threshold": 0.2,
            "input_policy": "positive_real"
        }"#;

        let analysis: AnalysisConfig = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.consistency_threshold, 0.2);
        assert_eq!(analysis.input_policy, InputPolicy::PositiveReal);
    }
}
