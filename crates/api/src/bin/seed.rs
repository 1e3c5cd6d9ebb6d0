//! Loads the sample poems into an empty database.
//!
//! Usage: `DATABASE_URL=postgres://... poetry-seed`

use anyhow::Context;
use poetry_api::config::db_pool_from_env;
use poetry_db::repositories::PoemStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    poetry_api::telemetry::init_tracing();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = poetry_db::create_pool(&database_url, &db_pool_from_env())
        .await
        .context("Failed to connect to database")?;

    poetry_db::run_migrations(&pool)
        .await
        .context(poetry_db::MIGRATION_REQUIREMENTS)?;

    let inserted = poetry_db::seed::seed_if_empty(&PoemStore::new(pool.clone()))
        .await
        .context("Failed to seed poems")?;

    if inserted == 0 {
        tracing::info!("Poems table already populated, nothing seeded");
    } else {
        tracing::info!(inserted, "Seeded sample poems");
    }

    pool.close().await;
    Ok(())
}
