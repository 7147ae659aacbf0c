//! Analysis Module - Pure domain services for AHP computation.
//!
//! This module contains stateless functions that turn pairwise comparison
//! matrices into priorities, consistency verdicts and a final ranking.
//!
//! # Components
//!
//! - `AhpSolver` - Column normalization and row averages (priority vector)
//! - `ConsistencyChecker` - λmax, CI, RI and CR with a pass/fail verdict
//! - `PrioritizationAggregator` - Weighted sum of criteria and alternative weights
//! - `MatrixAnalysis` - Solver and checker output for one matrix
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. Nothing is cached:
//! callers recompute from scratch whenever a matrix changes and is complete.

mod ahp_solver;
mod consistency_checker;
mod errors;
mod matrix_analysis;
mod prioritization;

pub use ahp_solver::{AhpSolver, SolverResult};
pub use consistency_checker::{ConsistencyChecker, ConsistencyResult, CONSISTENCY_THRESHOLD};
pub use errors::AnalysisError;
pub use matrix_analysis::MatrixAnalysis;
pub use prioritization::{Prioritization, PrioritizationAggregator};
