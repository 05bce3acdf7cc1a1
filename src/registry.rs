//! The registry owns the student collection and is its sole mutator.
//!
//! Both mutating operations are gated by the field validators: every failing
//! field is collected and reported, and no partially-valid record is ever
//! appended. Grade lists are append-only; no update or delete is exposed.

use tracing::{info, warn};

use crate::error::{FieldError, RegistryError};
use crate::model::{Grade, Student};
use crate::validate;

pub struct Registry {
    students: Vec<Student>,
    /// Monotonic id source, decoupled from the collection size. Seeded to
    /// the initial collection length so ids continue the existing sequence.
    next_id: u32,
}

impl Registry {
    /// Builds a registry over an injected initial collection.
    pub fn new(students: Vec<Student>) -> Self {
        let next_id = students.len() as u32;
        Registry { students, next_id }
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Linear scan by id.
    pub fn find(&self, id: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Validates all three fields, then appends a new active student with an
    /// empty grade list and the next id in sequence.
    ///
    /// Any validation failure aborts the whole operation with every failing
    /// field listed; nothing is appended.
    pub fn enroll(
        &mut self,
        name: &str,
        age: u32,
        program: &str,
    ) -> Result<&Student, RegistryError> {
        let mut errors: Vec<FieldError> = Vec::new();

        if let Err(e) = validate::NAME.validate(name) {
            errors.push(e);
        }
        if let Err(e) = validate::AGE.validate(&age) {
            errors.push(e);
        }
        if let Err(e) = validate::PROGRAM.validate(program) {
            errors.push(e);
        }

        if !errors.is_empty() {
            warn!(name, age, program, ?errors, "Enrollment rejected");
            return Err(RegistryError::Validation(errors));
        }

        self.next_id += 1;
        let student = Student {
            id: self.next_id,
            name: name.trim().to_string(),
            age,
            program: program.trim().to_string(),
            grades: Vec::new(),
            active: true,
        };

        info!(
            id = student.id,
            name = %student.name,
            program = %student.program,
            "Student enrolled"
        );

        self.students.push(student);
        Ok(self.students.last().expect("just pushed"))
    }

    /// Appends a grade to an existing student's record.
    ///
    /// Lookup happens first: an unknown id fails with
    /// [`RegistryError::StudentNotFound`] and mutates nothing. Field
    /// validation follows the same all-failures policy as [`Registry::enroll`].
    pub fn record_grade(
        &mut self,
        student_id: u32,
        subject: &str,
        score: f64,
        credits: f64,
    ) -> Result<&Grade, RegistryError> {
        let index = self
            .students
            .iter()
            .position(|s| s.id == student_id)
            .ok_or_else(|| {
                warn!(student_id, "Grade rejected: unknown student id");
                RegistryError::StudentNotFound(student_id)
            })?;

        let mut errors: Vec<FieldError> = Vec::new();

        if let Err(e) = validate::SUBJECT.validate(subject) {
            errors.push(e);
        }
        if let Err(e) = validate::SCORE.validate(&score) {
            errors.push(e);
        }
        if let Err(e) = validate::CREDITS.validate(&credits) {
            errors.push(e);
        }

        if !errors.is_empty() {
            warn!(student_id, subject, ?errors, "Grade rejected");
            return Err(RegistryError::Validation(errors));
        }

        let student = &mut self.students[index];
        student.grades.push(Grade {
            subject: subject.trim().to_string(),
            score,
            credits,
        });

        info!(
            student_id,
            student_name = %student.name,
            subject,
            score,
            "Grade recorded"
        );

        Ok(student.grades.last().expect("just pushed"))
    }
}
