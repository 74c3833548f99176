//! In-memory author storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::Author;
use blog_core::error::RepoError;
use blog_core::ports::{AuthorRepository, BaseRepository};

/// Authors kept in a `HashMap` behind an async `RwLock`.
///
/// Mirrors the database's unique index on (name, surname): the check and the
/// insert happen under the same write lock.
/// Note: Data is lost on process restart.
pub struct InMemoryAuthorRepository {
    authors: RwLock<HashMap<Uuid, Author>>,
}

impl InMemoryAuthorRepository {
    pub fn new() -> Self {
        Self {
            authors: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored authors.
    pub async fn count(&self) -> usize {
        self.authors.read().await.len()
    }
}

impl Default for InMemoryAuthorRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Author, Uuid> for InMemoryAuthorRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        let authors = self.authors.read().await;
        Ok(authors.get(&id).cloned())
    }

    async fn create(&self, author: Author) -> Result<Author, RepoError> {
        let mut authors = self.authors.write().await;

        if authors.contains_key(&author.id) {
            return Err(RepoError::Constraint("authors_pkey".to_string()));
        }
        if authors
            .values()
            .any(|a| a.name == author.name && a.surname == author.surname)
        {
            return Err(RepoError::Constraint(
                "idx_authors_name_surname".to_string(),
            ));
        }

        authors.insert(author.id, author.clone());
        Ok(author)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepository {
    async fn find_by_name_and_surname(
        &self,
        name: &str,
        surname: &str,
    ) -> Result<Option<Author>, RepoError> {
        let authors = self.authors.read().await;
        Ok(authors
            .values()
            .find(|a| a.name == name && a.surname == surname)
            .cloned())
    }
}
