//! Aggregation over student records: weighted averages, GPA, leaderboards,
//! per-subject statistics, and dataset-wide counters.
//!
//! Every function here is a pure read over its input. Grouping output
//! (programs, subjects) preserves first-appearance order.

use chrono::Utc;

use crate::analyzers::grade::grade_points;
use crate::analyzers::types::{
    OverallStats, Prediction, ProgramRanking, RankedStudent, SubjectStats,
};
use crate::analyzers::utility::{mean, round2};
use crate::model::Student;

/// Credit-weighted mean of a student's scores.
///
/// Returns 0.0 when the student has no grades or zero total credits, never
/// NaN.
pub fn weighted_average(student: &Student) -> f64 {
    let total_credits = student.total_credits();
    if total_credits == 0.0 {
        return 0.0;
    }

    let weighted_sum: f64 = student
        .grades
        .iter()
        .map(|g| g.score * g.credits)
        .sum();

    weighted_sum / total_credits
}

/// Credit-weighted GPA on the 4.0 scale, via [`grade_points`]. Same
/// zero-credit guard as [`weighted_average`].
pub fn gpa(student: &Student) -> f64 {
    let total_credits = student.total_credits();
    if total_credits == 0.0 {
        return 0.0;
    }

    let weighted_sum: f64 = student
        .grades
        .iter()
        .map(|g| grade_points(g.score) * g.credits)
        .sum();

    weighted_sum / total_credits
}

/// Placeholder predictor: the "prediction" is the current weighted average
/// rounded to 2 decimals. Kept as a stable contract for report output.
pub fn predict_performance(student: &Student) -> Prediction {
    let average = weighted_average(student);

    Prediction {
        predicted_score: round2(average),
        based_on_average: average,
    }
}

/// Groups students by program and returns up to `limit` per program, sorted
/// descending by weighted average.
///
/// Programs appear in the order they are first encountered. The sort is
/// stable: students with equal averages keep their original relative order.
pub fn top_by_program(students: &[Student], limit: usize) -> Vec<ProgramRanking> {
    let mut rankings: Vec<ProgramRanking> = Vec::new();

    for student in students {
        let ranked = RankedStudent {
            id: student.id,
            name: student.name.clone(),
            average: weighted_average(student),
        };

        match rankings.iter_mut().find(|r| r.program == student.program) {
            Some(ranking) => ranking.students.push(ranked),
            None => rankings.push(ProgramRanking {
                program: student.program.clone(),
                students: vec![ranked],
            }),
        }
    }

    for ranking in &mut rankings {
        ranking
            .students
            .sort_by(|a, b| b.average.total_cmp(&a.average));
        ranking.students.truncate(limit);
    }

    rankings
}

/// Cross-student statistics per subject: average (rounded to 2 decimals),
/// record count, score range, and the distinct programs taking the subject.
///
/// Subjects appear in the order they are first encountered while walking
/// students and their grades; program lists likewise, deduplicated.
pub fn subject_statistics(students: &[Student]) -> Vec<SubjectStats> {
    struct SubjectAcc {
        subject: String,
        scores: Vec<f64>,
        programs: Vec<String>,
    }

    let mut groups: Vec<SubjectAcc> = Vec::new();

    for student in students {
        for grade in &student.grades {
            let index = match groups.iter().position(|g| g.subject == grade.subject) {
                Some(index) => index,
                None => {
                    groups.push(SubjectAcc {
                        subject: grade.subject.clone(),
                        scores: Vec::new(),
                        programs: Vec::new(),
                    });
                    groups.len() - 1
                }
            };

            let acc = &mut groups[index];
            acc.scores.push(grade.score);
            if !acc.programs.contains(&student.program) {
                acc.programs.push(student.program.clone());
            }
        }
    }

    groups
        .into_iter()
        .map(|acc| {
            let max_score = acc.scores.iter().copied().fold(f64::MIN, f64::max);
            let min_score = acc.scores.iter().copied().fold(f64::MAX, f64::min);

            SubjectStats {
                subject: acc.subject,
                average: round2(mean(&acc.scores)),
                students: acc.scores.len(),
                max_score,
                min_score,
                programs: acc.programs,
            }
        })
        .collect()
}

/// Active students whose weighted average meets `threshold`, best first.
pub fn honor_roll(students: &[Student], threshold: f64) -> Vec<RankedStudent> {
    let mut roll: Vec<RankedStudent> = students
        .iter()
        .filter(|s| s.active)
        .map(|s| RankedStudent {
            id: s.id,
            name: s.name.clone(),
            average: weighted_average(s),
        })
        .filter(|r| r.average >= threshold)
        .collect();

    roll.sort_by(|a, b| b.average.total_cmp(&a.average));
    roll
}

/// Dataset-wide counters plus the mean of per-student weighted averages.
pub fn overall_statistics(students: &[Student]) -> OverallStats {
    let averages: Vec<f64> = students.iter().map(weighted_average).collect();

    OverallStats {
        generated_at: Utc::now(),
        total_students: students.len(),
        active_students: students.iter().filter(|s| s.active).count(),
        total_grades: students.iter().map(|s| s.grades.len()).sum(),
        overall_average: round2(mean(&averages)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Grade, Student, seed_students};

    fn student(name: &str, program: &str, grades: Vec<(f64, f64)>) -> Student {
        Student {
            id: 0,
            name: name.to_string(),
            age: 20,
            program: program.to_string(),
            grades: grades
                .into_iter()
                .map(|(score, credits)| Grade {
                    subject: "Test".to_string(),
                    score,
                    credits,
                })
                .collect(),
            active: true,
        }
    }

    #[test]
    fn test_weighted_average_seed_fixture() {
        let students = seed_students();
        // Ana: (8.5*6 + 9.0*8 + 7.5*4) / 18 = 153 / 18
        assert_eq!(round2(weighted_average(&students[0])), 8.5);
        // Carlos: (6.0*6 + 8.5*8 + 7.0*5) / 19 = 139 / 19
        assert_eq!(round2(weighted_average(&students[1])), 7.32);
    }

    #[test]
    fn test_weighted_average_no_grades_is_zero() {
        let s = student("Empty", "P1", vec![]);
        assert_eq!(weighted_average(&s), 0.0);
        assert_eq!(gpa(&s), 0.0);
    }

    #[test]
    fn test_weighted_average_zero_credits_is_zero() {
        let s = student("ZeroCredits", "P1", vec![(8.0, 0.0), (9.0, 0.0)]);
        assert_eq!(weighted_average(&s), 0.0);
        assert_eq!(gpa(&s), 0.0);
        assert!(!weighted_average(&s).is_nan());
    }

    #[test]
    fn test_gpa_seed_fixture() {
        let students = seed_students();
        // Ana: (3.3*6 + 4.0*8 + 3.0*4) / 18 = 63.8 / 18
        assert_eq!(round2(gpa(&students[0])), 3.54);
    }

    #[test]
    fn test_prediction_rounds_to_two_decimals() {
        let students = seed_students();
        let prediction = predict_performance(&students[1]);
        assert_eq!(prediction.predicted_score, 7.32);
        assert_eq!(prediction.based_on_average, weighted_average(&students[1]));
    }

    #[test]
    fn test_top_by_program_respects_limit_and_order() {
        let students = vec![
            student("A", "P1", vec![(9.0, 1.0)]),
            student("B", "P1", vec![(6.0, 1.0)]),
            student("C", "P1", vec![(8.0, 1.0)]),
            student("D", "P2", vec![(7.0, 1.0)]),
        ];

        let rankings = top_by_program(&students, 2);
        assert_eq!(rankings.len(), 2);

        assert_eq!(rankings[0].program, "P1");
        assert_eq!(rankings[0].students.len(), 2);
        assert_eq!(rankings[0].students[0].name, "A");
        assert_eq!(rankings[0].students[1].name, "C");

        assert_eq!(rankings[1].program, "P2");
        assert_eq!(rankings[1].students.len(), 1);
    }

    #[test]
    fn test_top_by_program_stable_on_ties() {
        let students = vec![
            student("First", "P1", vec![(8.0, 2.0)]),
            student("Second", "P1", vec![(8.0, 5.0)]),
        ];

        let rankings = top_by_program(&students, 3);
        assert_eq!(rankings[0].students[0].name, "First");
        assert_eq!(rankings[0].students[1].name, "Second");
    }

    #[test]
    fn test_subject_statistics_two_students_one_subject() {
        let a = Student {
            grades: vec![Grade {
                subject: "Math".to_string(),
                score: 8.0,
                credits: 4.0,
            }],
            ..student("A", "P1", vec![])
        };
        let b = Student {
            grades: vec![Grade {
                subject: "Math".to_string(),
                score: 6.0,
                credits: 4.0,
            }],
            ..student("B", "P1", vec![])
        };

        let stats = subject_statistics(&[a, b]);
        assert_eq!(stats.len(), 1);
        assert_eq!(stats[0].subject, "Math");
        assert_eq!(stats[0].average, 7.0);
        assert_eq!(stats[0].students, 2);
        assert_eq!(stats[0].max_score, 8.0);
        assert_eq!(stats[0].min_score, 6.0);
        assert_eq!(stats[0].programs, vec!["P1".to_string()]);
    }

    #[test]
    fn test_subject_statistics_first_encounter_order() {
        let students = seed_students();
        let stats = subject_statistics(&students);

        let subjects: Vec<&str> = stats.iter().map(|s| s.subject.as_str()).collect();
        assert_eq!(
            subjects,
            vec![
                "Matemáticas",
                "Programación",
                "Bases de Datos",
                "Redes",
                "Dibujo Técnico",
                "Historia del Arte",
            ]
        );

        // Matemáticas: Ana 8.5, Carlos 6.0, both Ingeniería Informática
        assert_eq!(stats[0].average, 7.25);
        assert_eq!(stats[0].students, 2);
        assert_eq!(stats[0].max_score, 8.5);
        assert_eq!(stats[0].min_score, 6.0);
        assert_eq!(stats[0].programs, vec!["Ingeniería Informática".to_string()]);
    }

    #[test]
    fn test_honor_roll_excludes_inactive() {
        // María averages 62/7 ≈ 8.86 but is inactive
        let students = seed_students();
        let roll = honor_roll(&students, 8.0);

        assert_eq!(roll.len(), 1);
        assert_eq!(roll[0].name, "Ana García");
    }

    #[test]
    fn test_overall_statistics_counts() {
        let students = seed_students();
        let stats = overall_statistics(&students);

        assert_eq!(stats.total_students, 3);
        assert_eq!(stats.active_students, 2);
        assert_eq!(stats.total_grades, 8);
        // mean(8.5, 7.3158, 8.8571)
        assert_eq!(stats.overall_average, 8.22);
    }
}
