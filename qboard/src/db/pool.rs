// SQLite connection pool implementation

use crate::config::DatabaseConfig;
use crate::errors::DatabaseError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

/// Database connection pool wrapper
///
/// Owns the shared handle to the SQLite store. All repositories are
/// constructed with a clone of this wrapper; no operation opens a
/// competing connection. The default configuration holds a single
/// connection, which preserves the board's single-writer usage model.
#[derive(Debug, Clone)]
pub struct DbPool {
    pool: SqlitePool,
}

impl DbPool {
    /// Open the database and build the connection pool
    ///
    /// # Arguments
    /// * `config` - Database configuration with the file path and pool settings
    ///
    /// # Errors
    /// Returns `DatabaseError::ConnectionFailed` if the store cannot be
    /// opened, including a missing file when `create_if_missing` is off.
    #[instrument(skip(config), fields(path = %config.path, max_connections = config.max_connections))]
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        info!("Opening database");

        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(config.create_if_missing)
            // Referential integrity is part of the data model contract
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .connect_with(options)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to open database");
                DatabaseError::ConnectionFailed(e.to_string())
            })?;

        info!(
            path = %config.path,
            max_connections = config.max_connections,
            "Database opened"
        );

        Ok(Self { pool })
    }

    /// Get a reference to the underlying pool
    ///
    /// This is used by repositories to execute queries
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Perform a health check on the database connection
    ///
    /// # Returns
    /// `Ok(())` if the database is reachable, `Err` otherwise
    #[instrument(skip(self))]
    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Database health check failed");
                DatabaseError::HealthCheckFailed(e.to_string())
            })?;

        tracing::debug!("Database health check passed");
        Ok(())
    }

    /// Get the current number of connections in the pool
    pub fn size(&self) -> u32 {
        self.pool.size()
    }

    /// Get the number of idle connections in the pool
    pub fn num_idle(&self) -> usize {
        self.pool.num_idle()
    }

    /// Close the connection pool gracefully
    #[instrument(skip(self))]
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
        info!("Database connection pool closed");
    }
}
