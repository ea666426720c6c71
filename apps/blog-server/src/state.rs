//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::BlogPostRepository;
use blog_infra::database::{DatabaseConnections, SeaOrmBlogPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn BlogPostRepository>,
    pub db: Arc<DatabaseConnections>,
}

impl AppState {
    /// Build the application state on top of an open connection pool.
    pub fn new(db: Arc<DatabaseConnections>) -> Self {
        let posts = Arc::new(SeaOrmBlogPostRepository::new(db.main.clone()));

        tracing::info!("Application state initialized");

        Self { posts, db }
    }
}
