//! Application layer - Derives everything the screens show from a snapshot.

mod evaluate_session;

pub use evaluate_session::{
    CriterionReport, MatrixReport, Ranking, RankingEntry, SessionEvaluator, SessionReport,
    StepGates, WizardStep,
};
