//! In-memory post storage.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{Author, Post};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

use super::InMemoryAuthorRepository;

/// Posts kept in a `HashMap`, joined against the author store on demand.
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<Uuid, Post>>,
    authors: Arc<InMemoryAuthorRepository>,
}

impl InMemoryPostRepository {
    pub fn new(authors: Arc<InMemoryAuthorRepository>) -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
            authors,
        }
    }

    /// Number of stored posts.
    pub async fn count(&self) -> usize {
        self.posts.read().await.len()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn create(&self, post: Post) -> Result<Post, RepoError> {
        // Same guarantee as the posts.author_id foreign key
        if self.authors.find_by_id(post.author_id).await?.is_none() {
            return Err(RepoError::Constraint("posts_author_id_fkey".to_string()));
        }

        let mut posts = self.posts.write().await;
        if posts.contains_key(&post.id) {
            return Err(RepoError::Constraint("posts_pkey".to_string()));
        }

        posts.insert(post.id, post.clone());
        Ok(post)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_with_author(&self, id: Uuid) -> Result<Option<(Post, Option<Author>)>, RepoError> {
        let Some(post) = self.posts.read().await.get(&id).cloned() else {
            return Ok(None);
        };

        let author = self.authors.find_by_id(post.author_id).await?;
        Ok(Some((post, author)))
    }
}
