use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DbConn, DbErr};
use sea_orm_migration::MigratorTrait;
use thiserror::Error;

use super::config::DatabaseConfig;
use super::migration::Migrator;

/// Startup failures of the storage adapter. Neither is retried.
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Failed to connect to the database: {0}")]
    Connect(#[source] DbErr),

    #[error("Failed to migrate the database schema: {0}")]
    Migrate(#[source] DbErr),
}

/// Live database handle with the schema brought up to date.
///
/// Constructed once at startup and handed to the repositories.
pub struct DatabaseConnections {
    pub main: DbConn,
}

impl DatabaseConnections {
    /// Connect to the configured database and run pending migrations.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        tracing::info!(
            host = %config.host,
            database = %config.name,
            "Initializing database connection..."
        );

        let opts = ConnectOptions::new(config.url())
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        Self::open(opts).await
    }

    /// Connect with explicit options and run pending migrations.
    pub async fn open(opts: ConnectOptions) -> Result<Self, DatabaseError> {
        let main = Database::connect(opts)
            .await
            .map_err(DatabaseError::Connect)?;
        tracing::info!("Database connected");

        Migrator::up(&main, None)
            .await
            .map_err(DatabaseError::Migrate)?;
        tracing::info!("Database schema is up to date");

        Ok(Self { main })
    }
}
