//! Hand-written repository doubles for service tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Author, Post};
use crate::error::RepoError;
use crate::ports::{AuthorRepository, BaseRepository, PostRepository};

#[derive(Default)]
pub struct FakeAuthorRepository {
    authors: Mutex<Vec<Author>>,
    creates: AtomicUsize,
}

impl FakeAuthorRepository {
    pub fn seed(&self, name: &str, surname: &str) -> Author {
        let author = Author::new(name.to_string(), surname.to_string());
        self.authors.lock().unwrap().push(author.clone());
        author
    }

    pub fn count(&self) -> usize {
        self.authors.lock().unwrap().len()
    }

    pub fn create_calls(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BaseRepository<Author, Uuid> for FakeAuthorRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, RepoError> {
        Ok(self.authors.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn create(&self, author: Author) -> Result<Author, RepoError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        let mut authors = self.authors.lock().unwrap();
        if authors
            .iter()
            .any(|a| a.name == author.name && a.surname == author.surname)
        {
            return Err(RepoError::Constraint("authors_name_surname".to_string()));
        }
        authors.push(author.clone());
        Ok(author)
    }
}

#[async_trait]
impl AuthorRepository for FakeAuthorRepository {
    async fn find_by_name_and_surname(
        &self,
        name: &str,
        surname: &str,
    ) -> Result<Option<Author>, RepoError> {
        Ok(self
            .authors
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.name == name && a.surname == surname)
            .cloned())
    }
}

/// Simulates another request inserting the same author between our lookup
/// and our insert.
pub struct RacingAuthorRepository {
    winner: Author,
    lookups: AtomicUsize,
}

impl RacingAuthorRepository {
    pub fn new(winner: Author) -> Self {
        Self {
            winner,
            lookups: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl BaseRepository<Author, Uuid> for RacingAuthorRepository {
    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Author>, RepoError> {
        Ok(None)
    }

    async fn create(&self, _author: Author) -> Result<Author, RepoError> {
        Err(RepoError::Constraint("authors_name_surname".to_string()))
    }
}

#[async_trait]
impl AuthorRepository for RacingAuthorRepository {
    async fn find_by_name_and_surname(
        &self,
        _name: &str,
        _surname: &str,
    ) -> Result<Option<Author>, RepoError> {
        if self.lookups.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(None)
        } else {
            Ok(Some(self.winner.clone()))
        }
    }
}

pub struct FakePostRepository {
    posts: Mutex<HashMap<Uuid, Post>>,
    authors: Arc<FakeAuthorRepository>,
    fail_writes: bool,
}

impl FakePostRepository {
    pub fn new(authors: Arc<FakeAuthorRepository>) -> Self {
        Self {
            posts: Mutex::new(HashMap::new()),
            authors,
            fail_writes: false,
        }
    }

    pub fn failing(authors: Arc<FakeAuthorRepository>) -> Self {
        Self {
            fail_writes: true,
            ..Self::new(authors)
        }
    }

    pub fn count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for FakePostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        Ok(self.posts.lock().unwrap().get(&id).cloned())
    }

    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        if self.fail_writes {
            return Err(RepoError::Connection("storage unavailable".to_string()));
        }
        self.posts.lock().unwrap().insert(post.id, post.clone());
        Ok(post)
    }
}

#[async_trait]
impl PostRepository for FakePostRepository {
    async fn find_with_author(&self, id: Uuid) -> Result<Option<(Post, Option<Author>)>, RepoError> {
        let Some(post) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        let author = self.authors.find_by_id(post.author_id).await?;
        Ok(Some((post, author)))
    }
}
