//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
#[cfg(any(test, not(feature = "mongodb")))]
use quill_infra::database::InMemoryPostRepository;

#[cfg(feature = "mongodb")]
use quill_infra::database::{DatabaseConfig, DatabaseConnection, MongoPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    /// Name of the backing store, reported by the health check.
    pub store: &'static str,
}

/// Startup failures. Any of these ends the process.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("MONGODB_URI is not set")]
    MissingDatabaseUri,

    #[error("MongoDB connection error: {0}")]
    Connection(String),
}

impl AppState {
    /// State over an explicitly provided repository.
    pub fn with_repository(posts: Arc<dyn PostRepository>, store: &'static str) -> Self {
        Self { posts, store }
    }

    /// State over a fresh in-memory repository.
    #[cfg(any(test, not(feature = "mongodb")))]
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()), "memory")
    }

    /// Connect the document store and build the state around it.
    #[cfg(feature = "mongodb")]
    pub async fn connect(db_config: Option<&DatabaseConfig>) -> Result<Self, StartupError> {
        let config = db_config.ok_or(StartupError::MissingDatabaseUri)?;
        let connection = DatabaseConnection::init(config)
            .await
            .map_err(|e| StartupError::Connection(e.to_string()))?;
        let repo = Arc::new(MongoPostRepository::new(&connection));

        tracing::info!("Application state initialized");
        Ok(Self::with_repository(repo, "mongodb"))
    }

    #[cfg(not(feature = "mongodb"))]
    pub async fn connect() -> Result<Self, StartupError> {
        tracing::warn!("Running without mongodb feature - posts are kept in memory only");
        Ok(Self::in_memory())
    }
}
