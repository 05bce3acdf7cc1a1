//! Field validators gating all writes into the registry.
//!
//! A [`Validator`] pairs a predicate with the field name and the error
//! message reported when the predicate fails. Validators are pure: they
//! either hand the value back or describe why it was rejected.

use crate::error::{FieldError, ValidationResult};

pub struct Validator<T: ?Sized> {
    field: &'static str,
    message: &'static str,
    predicate: fn(&T) -> bool,
}

impl<T: ?Sized> Validator<T> {
    pub const fn new(field: &'static str, message: &'static str, predicate: fn(&T) -> bool) -> Self {
        Validator {
            field,
            message,
            predicate,
        }
    }

    pub fn validate<'a>(&self, value: &'a T) -> ValidationResult<&'a T> {
        if (self.predicate)(value) {
            Ok(value)
        } else {
            Err(FieldError {
                field: self.field,
                message: self.message,
            })
        }
    }
}

/// Finite and strictly positive.
pub fn is_positive(value: &f64) -> bool {
    value.is_finite() && *value > 0.0
}

pub fn is_positive_int(value: &u32) -> bool {
    *value > 0
}

/// Non-empty after trimming whitespace.
pub fn is_non_empty(value: &str) -> bool {
    !value.trim().is_empty()
}

pub static NAME: Validator<str> =
    Validator::new("name", "name must not be empty", is_non_empty);
pub static AGE: Validator<u32> =
    Validator::new("age", "age must be a positive number", is_positive_int);
pub static PROGRAM: Validator<str> =
    Validator::new("program", "program must not be empty", is_non_empty);
pub static SUBJECT: Validator<str> =
    Validator::new("subject", "subject must not be empty", is_non_empty);
pub static SCORE: Validator<f64> =
    Validator::new("score", "score must be a positive number", is_positive);
pub static CREDITS: Validator<f64> =
    Validator::new("credits", "credits must be a positive number", is_positive);
