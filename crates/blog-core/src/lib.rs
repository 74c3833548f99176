//! # Blog Core
//!
//! The domain layer of the blog service.
//! This crate contains the business rules (author resolution, post creation,
//! input validation) with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

pub use error::{DomainError, FieldViolation, RepoError};
pub use services::{AuthorService, PostService};
