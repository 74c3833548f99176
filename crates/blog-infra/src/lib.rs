//! # Blog Infrastructure
//!
//! Concrete implementations of the repository ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//!
//! The in-memory repositories are always available and back the service when
//! no database is configured.

pub mod database;
pub mod memory;

// Re-exports - In-Memory
pub use memory::{InMemoryAuthorRepository, InMemoryPostRepository};

// Re-exports - PostgreSQL
pub use database::DatabaseConfig;
#[cfg(feature = "postgres")]
pub use database::{DatabasePool, PostgresAuthorRepository, PostgresPostRepository};
