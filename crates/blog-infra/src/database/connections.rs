use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DbConn, DbErr, Schema};

use super::entity::blog_post;

/// Configuration for the blog database.
///
/// `url` is the connection target; tests and normal operation use different ones.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
        }
    }
}

/// Owns the connection pool shared by every request.
///
/// # Example
/// ```ignore
/// let db = DatabaseConnections::init(&DatabaseConfig::new("sqlite://blog.db?mode=rwc")).await?;
/// db.ensure_schema().await?;
/// let repo = SeaOrmBlogPostRepository::new(db.main.clone());
/// ```
pub struct DatabaseConnections {
    /// Primary database pool.
    pub main: DbConn,
}

impl DatabaseConnections {
    /// Open the connection pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!(
            backend = ?main.get_database_backend(),
            "Database connected (pool: {})",
            config.max_connections
        );

        Ok(Self { main })
    }

    /// Create the `blog_posts` table if it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), DbErr> {
        let backend = self.main.get_database_backend();
        let schema = Schema::new(backend);

        let mut stmt = schema.create_table_from_entity(blog_post::Entity);
        stmt.if_not_exists();

        self.main.execute(backend.build(&stmt)).await?;
        tracing::debug!("Schema for blog_posts ensured");
        Ok(())
    }

    /// Check that the database answers.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.main.ping().await
    }

    /// Close the pool. Clones of `main` held elsewhere are closed as well.
    pub async fn close(&self) -> Result<(), DbErr> {
        self.main.clone().close().await?;
        tracing::info!("Database connection closed");
        Ok(())
    }
}
