//! PostgreSQL connection pool construction

use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use vitrina_common::DatabaseConfig;

/// Maximum time to wait for a connection from the pool
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);
/// Idle time before a pooled connection is closed
const IDLE_TIMEOUT: Duration = Duration::from_secs(300);
/// Maximum lifetime of a pooled connection
const MAX_LIFETIME: Duration = Duration::from_secs(1800);

/// Create a connection pool from the shared database configuration.
///
/// Connection counts come from [`DatabaseConfig`]; the timeout knobs are
/// fixed here since nothing tunes them per deployment.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .idle_timeout(IDLE_TIMEOUT)
        .max_lifetime(MAX_LIFETIME)
        .connect(&config.url)
        .await
}
