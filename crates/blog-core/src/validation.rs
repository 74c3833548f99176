//! Input validation rules shared by the submission types.
//!
//! Rules are pure functions: they never touch storage, so a submission can be
//! rejected before any repository call is made.

use std::borrow::Cow;

use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{DomainError, FieldViolation};

pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 100;

pub const AUTHOR_NAME_MIN_LEN: usize = 3;
pub const AUTHOR_NAME_MAX_LEN: usize = 100;

fn rule(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Required text: rejects empty and whitespace-only values.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Required text whose length in characters must fall in `min..=max`.
fn bounded_text(
    value: &str,
    min: usize,
    max: usize,
    required_message: &'static str,
    length_message: &'static str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule("required", required_message));
    }
    let len = value.chars().count();
    if len < min || len > max {
        return Err(rule("length", length_message));
    }
    Ok(())
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    bounded_text(
        title,
        TITLE_MIN_LEN,
        TITLE_MAX_LEN,
        "Title is required.",
        "Title must be between 3 and 100 characters.",
    )
}

pub fn validate_author_name(name: &str) -> Result<(), ValidationError> {
    bounded_text(
        name,
        AUTHOR_NAME_MIN_LEN,
        AUTHOR_NAME_MAX_LEN,
        "Name is required.",
        "Name must be between 3 and 100 characters.",
    )
}

pub fn validate_author_surname(surname: &str) -> Result<(), ValidationError> {
    bounded_text(
        surname,
        AUTHOR_NAME_MIN_LEN,
        AUTHOR_NAME_MAX_LEN,
        "Surname is required.",
        "Surname must be between 3 and 100 characters.",
    )
}

/// Run the validator of `input`, converting failures into a domain error.
pub fn check<T: Validate>(input: &T) -> Result<(), DomainError> {
    input.validate().map_err(DomainError::from)
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        let mut violations: Vec<FieldViolation> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |err| {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| err.code.to_string());
                    FieldViolation::new(field.clone(), message)
                })
            })
            .collect();

        // field_errors() is backed by a HashMap
        violations.sort_by(|a, b| a.field.cmp(&b.field));

        DomainError::Validation(violations)
    }
}
