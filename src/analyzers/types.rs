//! Derived result types produced by the analyzers.
//!
//! None of these are stored; every value is recomputed on demand from the
//! current student records.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::Grade;

/// Cross-student statistics for a single subject.
#[derive(Debug, Serialize)]
pub struct SubjectStats {
    pub subject: String,
    /// Mean score across all records for this subject, rounded to 2 decimals.
    pub average: f64,
    /// Number of grade records (one per student taking the subject).
    pub students: usize,
    pub max_score: f64,
    pub min_score: f64,
    /// Distinct programs of the students taking this subject, in order of
    /// first appearance.
    pub programs: Vec<String>,
}

/// A student paired with their weighted average, as used in rankings.
#[derive(Debug, Clone, Serialize)]
pub struct RankedStudent {
    pub id: u32,
    pub name: String,
    pub average: f64,
}

/// Leaderboard for one program: up to `limit` students, best average first.
#[derive(Debug, Serialize)]
pub struct ProgramRanking {
    pub program: String,
    pub students: Vec<RankedStudent>,
}

/// Placeholder performance prediction. The predicted score is simply the
/// current weighted average rounded to 2 decimals; no model behind it.
#[derive(Debug, Serialize)]
pub struct Prediction {
    pub predicted_score: f64,
    pub based_on_average: f64,
}

/// Identity section of a [`StudentReport`].
#[derive(Debug, Serialize)]
pub struct StudentSummary {
    pub name: String,
    pub age: u32,
    pub program: String,
    pub active: bool,
}

/// Performance section of a [`StudentReport`].
#[derive(Debug, Serialize)]
pub struct PerformanceSummary {
    pub average: f64,
    pub total_subjects: usize,
    pub best_score: Option<f64>,
    pub worst_score: Option<f64>,
    /// Grades with score >= 7.0.
    pub passed: usize,
}

/// Breakdown section of a [`StudentReport`]: the first grade, the second
/// grade, and a count of the rest. Missing slots are `None`, never an error.
#[derive(Debug, Serialize)]
pub struct GradeBreakdown {
    pub first: Option<Grade>,
    pub second: Option<Grade>,
    pub remaining: usize,
}

/// Complete per-student report, serialized as JSON by the demo.
#[derive(Debug, Serialize)]
pub struct StudentReport {
    pub generated_at: DateTime<Utc>,
    pub student: StudentSummary,
    pub performance: PerformanceSummary,
    pub detail: GradeBreakdown,
}

/// Dataset-wide counters and the mean of per-student weighted averages.
#[derive(Debug, Serialize)]
pub struct OverallStats {
    pub generated_at: DateTime<Utc>,
    pub total_students: usize,
    pub active_students: usize,
    pub total_grades: usize,
    /// Mean of per-student weighted averages, rounded to 2 decimals.
    pub overall_average: f64,
}
