use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::Author;
use crate::validation::{not_blank, validate_title};

/// Post entity - a blog post attributed to exactly one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: String,
    pub content: String,
}

impl Post {
    /// Create a new post with a generated ID.
    pub fn new(author_id: Uuid, title: String, description: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            title,
            description,
            content,
        }
    }
}

/// A post together with its author, when the author was loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDetails {
    pub post: Post,
    pub author: Option<Author>,
}

impl PostDetails {
    pub fn new(post: Post, author: Option<Author>) -> Self {
        Self { post, author }
    }
}

/// Input of the post creation workflow.
///
/// The author is identified by name and surname; it is looked up (or created)
/// after validation succeeds.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct PostSubmission {
    #[validate(custom(function = "not_blank", message = "Author name is required."))]
    pub author_name: String,
    #[validate(custom(function = "not_blank", message = "Author surname is required."))]
    pub author_surname: String,
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    #[validate(custom(function = "not_blank", message = "Description is required."))]
    pub description: String,
    #[validate(custom(function = "not_blank", message = "Content is required."))]
    pub content: String,
}

impl PostSubmission {
    /// Build the post to persist once the author has been resolved.
    pub fn into_post(self, author_id: Uuid) -> Post {
        Post::new(author_id, self.title, self.description, self.content)
    }
}
