//! Domain layer containing AHP types and computations.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (judgments, entity kinds, errors)
//! - `matrix` - Pairwise comparison matrices, labels and resizing
//! - `analysis` - Pure services: priority vectors, consistency, final ranking
//! - `session` - The snapshot of one decision and the commands that edit it

pub mod analysis;
pub mod foundation;
pub mod matrix;
pub mod session;
