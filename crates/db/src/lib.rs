//! Persistence layer for poem records.
//!
//! Owns pool construction, migrations, the `poems` row model and the
//! [`repositories::PoemStore`] that every HTTP handler goes through.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;

pub use error::StoreError;

pub type DbPool = sqlx::PgPool;

/// Connection pool sizing, passed in explicitly by whoever builds the pool.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    /// Upper bound on open connections (default: `10`).
    pub max_connections: u32,
    /// How long a caller waits for a free connection before failing
    /// with `PoolTimedOut` (default: 5 seconds).
    pub acquire_timeout: Duration,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, config: &PoolConfig) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to prove the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Context attached to migration failures. The schema creates an ICU
/// collation, which fails on a non-UTF-8 database or a server built
/// without ICU.
pub const MIGRATION_REQUIREMENTS: &str = "Failed to run database migrations \
    (the schema needs a UTF-8 database on a PostgreSQL server built with ICU)";

/// Apply the embedded migrations from `db/migrations`.
///
/// See [`MIGRATION_REQUIREMENTS`] for the server prerequisites.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
