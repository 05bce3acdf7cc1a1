//! Core records: students and their grades.

use serde::{Deserialize, Serialize};

/// A single grade record. Immutable once created; owned by its [`Student`].
///
/// Scores live on a 0–10 scale; credits weight the grade in averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    pub subject: String,
    pub score: f64,
    pub credits: f64,
}

/// A student record. Grades are kept in insertion order, which doubles as
/// record order for reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: u32,
    pub name: String,
    pub age: u32,
    pub program: String,
    pub grades: Vec<Grade>,
    pub active: bool,
}

impl Student {
    pub fn total_credits(&self) -> f64 {
        self.grades.iter().map(|g| g.credits).sum()
    }
}

fn grade(subject: &str, score: f64, credits: f64) -> Grade {
    Grade {
        subject: subject.to_string(),
        score,
        credits,
    }
}

/// The fixed three-student dataset used by the CLI demo and as a test fixture.
pub fn seed_students() -> Vec<Student> {
    vec![
        Student {
            id: 1,
            name: "Ana García".to_string(),
            age: 22,
            program: "Ingeniería Informática".to_string(),
            grades: vec![
                grade("Matemáticas", 8.5, 6.0),
                grade("Programación", 9.0, 8.0),
                grade("Bases de Datos", 7.5, 4.0),
            ],
            active: true,
        },
        Student {
            id: 2,
            name: "Carlos López".to_string(),
            age: 24,
            program: "Ingeniería Informática".to_string(),
            grades: vec![
                grade("Matemáticas", 6.0, 6.0),
                grade("Programación", 8.5, 8.0),
                grade("Redes", 7.0, 5.0),
            ],
            active: true,
        },
        Student {
            id: 3,
            name: "María Rodríguez".to_string(),
            age: 21,
            program: "Arquitectura".to_string(),
            grades: vec![
                grade("Dibujo Técnico", 9.5, 4.0),
                grade("Historia del Arte", 8.0, 3.0),
            ],
            active: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_three_students() {
        let students = seed_students();
        assert_eq!(students.len(), 3);
        assert_eq!(students[0].name, "Ana García");
        assert_eq!(students[2].active, false);
    }

    #[test]
    fn test_total_credits() {
        let students = seed_students();
        assert_eq!(students[0].total_credits(), 18.0);
        assert_eq!(students[2].total_credits(), 7.0);
    }
}
