// src/main.rs
use dotenvy::dotenv;
use product_store::{backend, database};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let pool = database::db::connection::get_db_pool().await?;
    database::db::migrate::run_migrations(&pool).await?;

    backend::run_server(pool).await?;
    Ok(())
}
