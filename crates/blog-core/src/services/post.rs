use std::sync::Arc;

use uuid::Uuid;

use super::AuthorService;
use crate::domain::{PostDetails, PostSubmission};
use crate::error::DomainError;
use crate::ports::PostRepository;
use crate::validation;

/// Post workflows: creation with author resolution, and retrieval.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    authors: AuthorService,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, authors: AuthorService) -> Self {
        Self { posts, authors }
    }

    /// Create a post, reusing or creating its author by name and surname.
    ///
    /// Nothing is written when validation fails.
    pub async fn create_post(&self, submission: PostSubmission) -> Result<PostDetails, DomainError> {
        validation::check(&submission)?;

        let author = self
            .authors
            .resolve_author(&submission.author_name, &submission.author_surname)
            .await?;

        let created = self.posts.create(submission.into_post(author.id)).await?;
        tracing::info!(post_id = %created.id, author_id = %created.author_id, "Post created");

        Ok(PostDetails::new(created, Some(author)))
    }

    /// Fetch a post by ID, joining its author when `include_author` is set.
    ///
    /// An unknown ID is `Ok(None)`.
    pub async fn get_post(
        &self,
        id: Uuid,
        include_author: bool,
    ) -> Result<Option<PostDetails>, DomainError> {
        if include_author {
            let found = self.posts.find_with_author(id).await?;
            return Ok(found.map(|(post, author)| PostDetails::new(post, author)));
        }

        let found = self.posts.find_by_id(id).await?;
        Ok(found.map(|post| PostDetails::new(post, None)))
    }
}
