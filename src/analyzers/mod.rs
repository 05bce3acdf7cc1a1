//! Aggregation and reporting over student records.
//!
//! This module computes credit-weighted averages and GPAs, per-program
//! leaderboards, per-subject cross-student statistics, and structured
//! per-student reports. Everything here is read-only over its input;
//! mutation lives in the registry.

pub mod aggregate;
pub mod grade;
pub mod report;
pub mod types;
pub mod utility;
