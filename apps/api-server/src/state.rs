//! Application state - shared across all handlers.

use std::sync::Arc;

use summit_core::ports::PostRepository;
use summit_infra::DatabaseConfig;
use thiserror::Error;

#[cfg(feature = "postgres")]
use summit_infra::{DatabaseConnections, DatabaseError, SqlPostRepository};

#[cfg(not(feature = "postgres"))]
use summit_infra::InMemoryPostRepository;

/// Failures that keep the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Database is not configured: set DB_HOST, DB_USER, DB_PASSWORD and DB_NAME")]
    DatabaseNotConfigured,

    #[cfg(feature = "postgres")]
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Wrap an already constructed post repository.
    pub fn with_repository(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Build the application state with the storage adapter for this build.
    #[cfg(feature = "postgres")]
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Result<Self, StartupError> {
        let config = db_config.ok_or(StartupError::DatabaseNotConfigured)?;
        let connections = DatabaseConnections::init(config).await?;
        let posts: Arc<dyn PostRepository> = Arc::new(SqlPostRepository::new(connections.main));

        tracing::info!("Application state initialized");
        Ok(Self::with_repository(posts))
    }

    /// Build the application state with the storage adapter for this build.
    #[cfg(not(feature = "postgres"))]
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Result<Self, StartupError> {
        if db_config.is_some() {
            tracing::warn!("Built without postgres feature - database settings are ignored");
        }
        tracing::info!("Running without postgres feature - using in-memory repository");
        let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());

        tracing::info!("Application state initialized");
        Ok(Self::with_repository(posts))
    }
}
