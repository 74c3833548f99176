//! Domain-level error types.

use serde::Serialize;
use thiserror::Error;

/// A single failed validation rule on an input field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<FieldViolation>),

    #[error("Duplicate entity: {0}")]
    Duplicate(String),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    /// Field violations carried by a validation failure, empty otherwise.
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            DomainError::Validation(violations) => violations,
            _ => &[],
        }
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
