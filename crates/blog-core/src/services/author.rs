use std::sync::Arc;

use crate::domain::{Author, AuthorSubmission};
use crate::error::{DomainError, RepoError};
use crate::ports::AuthorRepository;
use crate::validation;

/// Author workflows: standalone creation and find-or-create resolution.
#[derive(Clone)]
pub struct AuthorService {
    authors: Arc<dyn AuthorRepository>,
}

impl AuthorService {
    pub fn new(authors: Arc<dyn AuthorRepository>) -> Self {
        Self { authors }
    }

    /// Validate and insert a new author.
    pub async fn create_author(&self, submission: AuthorSubmission) -> Result<Author, DomainError> {
        validation::check(&submission)?;

        let author = Author::new(submission.name, submission.surname);
        match self.authors.create(author).await {
            Ok(created) => {
                tracing::info!(author_id = %created.id, "Author created");
                Ok(created)
            }
            Err(RepoError::Constraint(_)) => Err(DomainError::Duplicate(
                "An author with this name and surname already exists".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// Map a (name, surname) pair to a stable author, creating it if absent.
    ///
    /// Storage rejects a second author with the same pair, so when a concurrent
    /// request inserts it first the winner's row is read back and reused.
    pub async fn resolve_author(&self, name: &str, surname: &str) -> Result<Author, DomainError> {
        if let Some(existing) = self.authors.find_by_name_and_surname(name, surname).await? {
            tracing::debug!(author_id = %existing.id, "Reusing existing author");
            return Ok(existing);
        }

        let candidate = Author::new(name.to_string(), surname.to_string());
        match self.authors.create(candidate).await {
            Ok(created) => {
                tracing::info!(author_id = %created.id, "Author created for new post");
                Ok(created)
            }
            Err(RepoError::Constraint(msg)) => {
                tracing::debug!("Author inserted concurrently, reloading");
                self.authors
                    .find_by_name_and_surname(name, surname)
                    .await?
                    .ok_or(DomainError::Repository(RepoError::Constraint(msg)))
            }
            Err(e) => Err(e.into()),
        }
    }
}
