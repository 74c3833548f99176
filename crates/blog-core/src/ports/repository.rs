use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Author, Post};
use crate::error::RepoError;

/// Generic repository trait for insert-once entities.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity and return the stored record.
    async fn create(&self, entity: T) -> Result<T, RepoError>;
}

/// Author repository with lookup by full name.
#[async_trait]
pub trait AuthorRepository: BaseRepository<Author, Uuid> {
    /// Find an author by exact, case-sensitive name and surname.
    async fn find_by_name_and_surname(
        &self,
        name: &str,
        surname: &str,
    ) -> Result<Option<Author>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Find a post by ID together with its author.
    ///
    /// The author is `None` only if the referenced row is missing.
    async fn find_with_author(&self, id: Uuid) -> Result<Option<(Post, Option<Author>)>, RepoError>;
}
