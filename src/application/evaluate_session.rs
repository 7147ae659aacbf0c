//! SessionEvaluator - Recomputes every derived result of a session snapshot.
//!
//! Evaluation is stateless: each call starts from the snapshot and runs
//! - criteria matrix → weights + consistency (when complete)
//! - each criterion's alternative matrix → weights + consistency (when complete)
//! - criteria weights × alternative weights → final ranking
//!
//! Nothing is cached between calls.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

use crate::config::AnalysisConfig;
use crate::domain::analysis::{AnalysisError, MatrixAnalysis, PrioritizationAggregator};
use crate::domain::matrix::PairwiseMatrix;
use crate::domain::session::AhpSession;

/// The three screens of the guided flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Criteria,
    Alternatives,
    Results,
}

/// Which steps the current snapshot unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepGates {
    /// The criteria matrix is complete and consistent.
    pub criteria_consistent: bool,
    /// Every criterion has a complete alternative matrix.
    pub alternatives_complete: bool,
}

impl StepGates {
    /// True iff the user may move on to `step`.
    pub fn can_enter(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Criteria => true,
            WizardStep::Alternatives => self.criteria_consistent,
            WizardStep::Results => self.criteria_consistent && self.alternatives_complete,
        }
    }

    /// The last step the user may enter.
    pub fn furthest(&self) -> WizardStep {
        [WizardStep::Results, WizardStep::Alternatives]
            .into_iter()
            .find(|&step| self.can_enter(step))
            .unwrap_or(WizardStep::Criteria)
    }
}

/// Derived results for one matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixReport {
    /// Unset off-diagonal cells; 0 once complete.
    pub missing: usize,
    /// Present iff the matrix is complete.
    pub analysis: Option<MatrixAnalysis>,
}

/// Alternative comparison results under one criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionReport {
    pub criterion: usize,
    pub label: String,
    #[serde(flatten)]
    pub matrix: MatrixReport,
}

/// One alternative's place in the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub index: usize,
    pub label: String,
    pub score: f64,
    pub best: bool,
}

/// Weighted-sum ranking of the alternatives, in alternative order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub entries: Vec<RankingEntry>,
    pub max_score: f64,
    /// Label of the first alternative with the top score, if it is positive.
    pub best_alternative: Option<String>,
}

/// Everything the presentation layer renders for a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    pub criteria: MatrixReport,
    pub alternatives: Vec<CriterionReport>,
    pub steps: StepGates,
    /// Where the guided flow may advance to.
    pub furthest_step: WizardStep,
    /// Present once the criteria matrix is complete.
    pub ranking: Option<Ranking>,
}

/// Evaluates session snapshots.
pub struct SessionEvaluator {
    consistency_threshold: f64,
}

impl SessionEvaluator {
    /// Creates a new SessionEvaluator.
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            consistency_threshold: config.consistency_threshold,
        }
    }

    /// Computes every derived result of `session`.
    ///
    /// Incomplete matrices are reported as missing cells rather than errors.
    /// The ranking uses only complete alternative matrices; a criterion
    /// without one contributes nothing.
    pub fn evaluate(&self, session: &AhpSession) -> Result<SessionReport, AnalysisError> {
        let criteria = self.matrix_report(session.criteria_matrix())?;
        let alternative_count = session.alternatives().len();

        let alternatives = session
            .criteria()
            .labels()
            .iter()
            .enumerate()
            .map(|(criterion, label)| -> Result<CriterionReport, AnalysisError> {
                let matrix = match session.alternative_matrix(criterion) {
                    Some(matrix) => self.matrix_report(matrix)?,
                    None => MatrixReport {
                        missing: alternative_count * alternative_count.saturating_sub(1),
                        analysis: None,
                    },
                };
                Ok(CriterionReport {
                    criterion,
                    label: label.clone(),
                    matrix,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let steps = StepGates {
            criteria_consistent: criteria
                .analysis
                .as_ref()
                .is_some_and(MatrixAnalysis::is_consistent),
            alternatives_complete: alternatives.iter().all(|r| r.matrix.analysis.is_some()),
        };

        let ranking = match &criteria.analysis {
            Some(analysis) => Some(Self::rank(session, analysis.weights(), &alternatives)?),
            None => None,
        };

        debug!(
            criteria = session.criteria().len(),
            alternatives = alternative_count,
            furthest_step = ?steps.furthest(),
            ranked = ranking.is_some(),
            "Evaluated session"
        );

        Ok(SessionReport {
            criteria,
            alternatives,
            furthest_step: steps.furthest(),
            steps,
            ranking,
        })
    }

    fn matrix_report(&self, matrix: &PairwiseMatrix) -> Result<MatrixReport, AnalysisError> {
        let analysis = MatrixAnalysis::run_if_complete(matrix, self.consistency_threshold)?;
        match &analysis {
            Some(analysis) if !analysis.is_consistent() => warn!(
                size = matrix.size(),
                consistency_ratio = analysis.consistency.consistency_ratio,
                threshold = self.consistency_threshold,
                "Inconsistent comparison matrix"
            ),
            Some(analysis) => debug!(
                size = matrix.size(),
                consistency_ratio = analysis.consistency.consistency_ratio,
                "Analyzed matrix"
            ),
            None => {}
        }
        Ok(MatrixReport {
            missing: matrix.missing_count(),
            analysis,
        })
    }

    fn rank(
        session: &AhpSession,
        criteria_weights: &[f64],
        alternatives: &[CriterionReport],
    ) -> Result<Ranking, AnalysisError> {
        let alternative_weights: BTreeMap<usize, Vec<f64>> = alternatives
            .iter()
            .filter_map(|r| {
                r.matrix
                    .analysis
                    .as_ref()
                    .map(|a| (r.criterion, a.weights().to_vec()))
            })
            .collect();

        let labels = session.alternatives().labels();
        let prioritization =
            PrioritizationAggregator::aggregate(criteria_weights, &alternative_weights, labels.len())?;

        let entries = prioritization
            .final_scores
            .iter()
            .zip(labels)
            .enumerate()
            .map(|(index, (&score, label))| RankingEntry {
                index,
                label: label.clone(),
                score,
                best: prioritization.is_best(index),
            })
            .collect();

        Ok(Ranking {
            entries,
            max_score: prioritization.max_score,
            best_alternative: prioritization
                .best_index()
                .map(|i| labels[i].clone()),
        })
    }
}
