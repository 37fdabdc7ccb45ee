//! Application setup: database, storage client, routes, server.

pub mod database;
pub mod routes;
pub mod server;
pub mod storage;

use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use clipstore_core::Config;
use clipstore_db::PgVideoRepository;
use std::sync::Arc;

/// Wire the application together: pool + migrations, S3 client, state, routes.
pub async fn initialize_app(config: Config) -> Result<(Router, Arc<AppState>)> {
    let pool = database::setup_database(&config).await?;
    let videos = Arc::new(PgVideoRepository::new(pool));
    let s3 = storage::setup_storage(&config).await?;

    let state = Arc::new(AppState::new(config, videos, s3));
    let router = routes::build_router(state.clone())?;

    Ok((router, state))
}
