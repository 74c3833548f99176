//! Domain entities - the core business objects.

mod author;
mod post;

pub use author::{Author, AuthorSubmission};
pub use post::{Post, PostDetails, PostSubmission};
