//! In-memory repositories - used when no database is configured.

mod author;
mod post;

pub use author::InMemoryAuthorRepository;
pub use post::InMemoryPostRepository;

#[cfg(test)]
mod tests;
