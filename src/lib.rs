//! AHP Sherpa - Analytic Hierarchy Process engine
//!
//! This crate turns pairwise comparison judgments into priority weights,
//! checks their consistency, and ranks alternatives by weighted sum.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
