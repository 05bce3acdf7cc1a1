//! Per-student report assembly.

use chrono::Utc;

use crate::analyzers::aggregate::weighted_average;
use crate::analyzers::types::{GradeBreakdown, PerformanceSummary, StudentReport, StudentSummary};
use crate::model::Student;

/// Builds the detailed report for one student: identity, performance
/// summary, and the first/second/rest grade breakdown.
///
/// The breakdown shape is a fixed report contract: the first grade, the
/// second grade, and a count of everything after them. Shorter grade lists
/// leave the missing slots as `None`.
pub fn student_report(student: &Student) -> StudentReport {
    let scores: Vec<f64> = student.grades.iter().map(|g| g.score).collect();

    let best_score = scores.iter().copied().reduce(f64::max);
    let worst_score = scores.iter().copied().reduce(f64::min);

    StudentReport {
        generated_at: Utc::now(),
        student: StudentSummary {
            name: student.name.clone(),
            age: student.age,
            program: student.program.clone(),
            active: student.active,
        },
        performance: PerformanceSummary {
            average: weighted_average(student),
            total_subjects: student.grades.len(),
            best_score,
            worst_score,
            passed: scores.iter().filter(|s| **s >= 7.0).count(),
        },
        detail: GradeBreakdown {
            first: student.grades.first().cloned(),
            second: student.grades.get(1).cloned(),
            remaining: student.grades.len().saturating_sub(2),
        },
    }
}
