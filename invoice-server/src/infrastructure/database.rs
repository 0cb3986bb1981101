use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::info;

fn pool_options(max_connections: u32) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .acquire_timeout(std::time::Duration::from_secs(5))
}

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    let pool = pool_options(max_connections).connect(database_url).await?;
    info!(max_connections, "connected to PostgreSQL");
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("applying invoice schema migrations");
    sqlx::migrate!().run(pool).await?;
    info!("migrations up to date");
    Ok(())
}
