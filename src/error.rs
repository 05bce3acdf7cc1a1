//! Typed errors for registry mutations.

use thiserror::Error;

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// Outcome of running one validator over one value.
pub type ValidationResult<T> = Result<T, FieldError>;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// One or more fields failed validation. Every failing field is listed;
    /// no partially-valid record is ever constructed.
    #[error("validation failed: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Validation(Vec<FieldError>),

    /// No student with the given id exists in the registry.
    #[error("no student with id {0}")]
    StudentNotFound(u32),
}
