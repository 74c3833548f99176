#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the blog database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Apply pending migrations before serving requests.
    pub run_migrations: bool,
}

/// Pooled connection to the blog database.
///
/// `DbConn` is internally reference counted, so repositories get their own
/// clone of the pool handle.
#[cfg(feature = "postgres")]
#[cfg_attr(not(test), derive(Clone))]
pub struct DatabasePool {
    pub conn: DbConn,
}

#[cfg(feature = "postgres")]
impl DatabasePool {
    /// Open the connection pool described by `config`.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection pool...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let conn = Database::connect(opts).await?;
        tracing::info!(
            "Database connected (pool: {}..{})",
            config.min_connections,
            config.max_connections
        );

        Ok(Self { conn })
    }
}
