//! Postgres connection pool and schema migrations.

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::store::StoreError;

/// Open a connection pool and verify the database answers.
pub async fn connect(url: &str, cfg: &DatabaseConfig) -> Result<PgPool, StoreError> {
    let pool = PgPoolOptions::new()
        .max_connections(cfg.max_connections)
        .acquire_timeout(Duration::from_secs(cfg.acquire_timeout_secs))
        .connect(url)
        .await
        .map_err(|e| StoreError::Unavailable(format!("failed to connect to database: {e}")))?;

    info!(max_connections = cfg.max_connections, "database pool ready");
    Ok(pool)
}

/// Apply the embedded migrations under `migrations/`.
pub async fn migrate(pool: &PgPool) -> Result<(), StoreError> {
    info!("running database migrations");
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| StoreError::Unavailable(format!("migration failed: {e}")))?;
    info!("migrations completed");
    Ok(())
}
