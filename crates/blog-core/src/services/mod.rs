//! Application services - the workflows exposed to the HTTP layer.

mod author;
mod post;

#[cfg(test)]
mod testing;

pub use author::AuthorService;
pub use post::PostService;
