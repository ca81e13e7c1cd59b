pub mod errors;
mod handlers;
mod routes;

use axum::{routing::get, Router};
use sqlx::{Pool, Postgres};
use std::env;
use std::net::SocketAddr;

#[derive(Clone)]
pub struct AppState {
    pub db: Pool<Postgres>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "Backend is running" }))
        .merge(routes::api_routes())
        .with_state(state)
}

pub async fn run_server(pool: Pool<Postgres>) -> anyhow::Result<()> {
    let state = AppState { db: pool };

    let addr: SocketAddr = env::var("LISTEN_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
        .parse()?;
    tracing::info!("server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
