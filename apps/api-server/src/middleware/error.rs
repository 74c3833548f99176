//! Error handling - RFC 7807 compliant responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blog_core::error::{DomainError, RepoError};
use blog_shared::{ErrorResponse, FieldError};
use std::fmt;

use crate::mapping;
use crate::observability::RequestId;

/// Application-level error type that converts to RFC 7807 responses.
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Conflict(String),
    Internal(String),
    UnsupportedMediaType(String),
    Validation(Vec<FieldError>),
}

impl AppError {
    /// Problem body for this error.
    pub fn problem(&self) -> ErrorResponse {
        match self {
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
            AppError::Internal(_) => ErrorResponse::internal_error(),
            AppError::UnsupportedMediaType(detail) => {
                ErrorResponse::unsupported_media_type(detail)
            }
            AppError::Validation(errors) => ErrorResponse::validation(errors.clone()),
        }
    }

    /// Attach the ID of the request this error occurred in.
    pub fn in_request(self, request_id: &RequestId) -> RequestError {
        RequestError {
            error: self,
            request_id: request_id.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
            AppError::UnsupportedMediaType(msg) => write!(f, "Unsupported media type: {}", msg),
            AppError::Validation(errors) => write!(f, "Validation errors: {:?}", errors),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(detail) = self {
            tracing::error!("Internal error: {}", detail);
        }
        HttpResponse::build(self.status_code()).json(self.problem())
    }
}

/// An [`AppError`] raised while serving a specific request. The problem body
/// carries the request ID so clients can quote it.
#[derive(Debug)]
pub struct RequestError {
    pub error: AppError,
    pub request_id: RequestId,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (request {})", self.error, self.request_id.as_str())
    }
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        self.error.status_code()
    }

    fn error_response(&self) -> HttpResponse {
        if let AppError::Internal(detail) = &self.error {
            tracing::error!(request_id = %self.request_id.as_str(), "Internal error: {}", detail);
        }
        HttpResponse::build(self.status_code())
            .json(self.error.problem().with_request_id(self.request_id.as_str()))
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(violations) => {
                AppError::Validation(mapping::field_errors(violations))
            }
            DomainError::Duplicate(msg) => AppError::Conflict(msg),
            DomainError::Repository(err) => err.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for handlers.
pub type RequestResult<T> = Result<T, RequestError>;

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::FieldViolation;

    #[test]
    fn test_validation_is_a_client_error() {
        let err: AppError = DomainError::Validation(vec![FieldViolation::new(
            "author_name",
            "Author name is required.",
        )])
        .into();

        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors[0].field, "authorName");
                assert_eq!(errors[0].message, "Author name is required.");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_storage_failures_are_internal() {
        let err: AppError =
            DomainError::Repository(RepoError::Connection("refused".to_string())).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let err: AppError = DomainError::Duplicate("exists".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_request_error_problem_carries_request_id() {
        let err = AppError::Conflict("exists".to_string())
            .in_request(&RequestId("req-42".to_string()));
        assert_eq!(err.status_code(), StatusCode::CONFLICT);

        let problem = err.error.problem().with_request_id(err.request_id.as_str());
        assert_eq!(problem.status, 409);
        assert_eq!(problem.request_id.as_deref(), Some("req-42"));
    }
}
