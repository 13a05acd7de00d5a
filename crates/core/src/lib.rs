//! # Ministry Core
//!
//! Domain types and the pure rules of the ministry dashboard: date
//! normalization, status classification, notice partitioning, month grouping
//! and summary counts. This crate performs no I/O.

/// Status derivation and date text normalization
pub mod dates;
/// Aggregation of the entry list into the dashboard view
pub mod dashboard;
/// Error types shared by every crate in the workspace
pub mod errors;
/// Schedule entries and dashboard view models
pub mod models;
