//! Field-by-field conversions between wire DTOs and domain types.

use blog_core::FieldViolation;
use blog_core::domain::{Author, AuthorSubmission, PostDetails, PostSubmission};
use blog_shared::FieldError;
use blog_shared::dto::{AuthorResponse, CreateAuthorRequest, CreatePostRequest, PostResponse};

/// The request's `author_id` is dropped; the author is resolved by name.
pub fn post_submission(req: CreatePostRequest) -> PostSubmission {
    PostSubmission {
        author_name: req.author_name,
        author_surname: req.author_surname,
        title: req.title,
        description: req.description,
        content: req.content,
    }
}

pub fn author_submission(req: CreateAuthorRequest) -> AuthorSubmission {
    AuthorSubmission {
        name: req.name,
        surname: req.surname,
    }
}

pub fn post_response(details: PostDetails) -> PostResponse {
    let PostDetails { post, author } = details;
    let (author_name, author_surname) = match author {
        Some(author) => (Some(author.name), Some(author.surname)),
        None => (None, None),
    };

    PostResponse {
        id: post.id,
        author_id: post.author_id,
        title: post.title,
        description: post.description,
        content: post.content,
        author_name,
        author_surname,
    }
}

pub fn author_response(author: Author) -> AuthorResponse {
    AuthorResponse {
        id: author.id,
        name: author.name,
        surname: author.surname,
    }
}

/// Violations keyed by their JSON field names.
pub fn field_errors(violations: Vec<FieldViolation>) -> Vec<FieldError> {
    violations
        .into_iter()
        .map(|v| FieldError {
            field: wire_field(&v.field).to_string(),
            message: v.message,
        })
        .collect()
}

/// Submission field name to request JSON field name.
fn wire_field(field: &str) -> &str {
    match field {
        "author_name" => "authorName",
        "author_surname" => "authorSurname",
        // title, description, content, name, surname
        other => other,
    }
}
