//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::{AuthorRepository, PostRepository};
use blog_core::{AuthorService, PostService};
use blog_infra::DatabaseConfig;
use blog_infra::memory::{InMemoryAuthorRepository, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::database::{DatabasePool, PostgresAuthorRepository, PostgresPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub authors: AuthorService,
}

impl AppState {
    /// Build the application state with the storage backend the
    /// configuration asks for, falling back to memory when it is unusable.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match Self::postgres(config).await {
                Ok(state) => state,
                Err(e) => {
                    tracing::error!(
                        "Failed to prepare database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        state
    }

    /// State backed by the in-memory repositories.
    pub fn in_memory() -> Self {
        let authors = Arc::new(InMemoryAuthorRepository::new());
        let posts = Arc::new(InMemoryPostRepository::new(authors.clone()));
        Self::from_repositories(posts, authors)
    }

    pub fn from_repositories(
        posts: Arc<dyn PostRepository>,
        authors: Arc<dyn AuthorRepository>,
    ) -> Self {
        let authors = AuthorService::new(authors);
        Self {
            posts: PostService::new(posts, authors.clone()),
            authors,
        }
    }

    #[cfg(feature = "postgres")]
    async fn postgres(config: &DatabaseConfig) -> Result<Self, migration::DbErr> {
        use migration::{Migrator, MigratorTrait};

        let pool = DatabasePool::connect(config).await?;

        if config.run_migrations {
            Migrator::up(&pool.conn, None).await?;
            tracing::info!("Database migrations applied");
        }

        Ok(Self::from_repositories(
            Arc::new(PostgresPostRepository::new(pool.conn.clone())),
            Arc::new(PostgresAuthorRepository::new(pool.conn)),
        ))
    }
}
