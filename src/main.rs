//! Tour booking back-office server.
//!
//! Reads configuration from the environment (and `.env`), connects to
//! Postgres when `DATABASE_URL` is set and serves the JSON API.

use std::sync::Arc;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use tourbooking_web::cache::AppCache;
use tourbooking_web::config::Config;
use tourbooking_web::db::{InMemoryStore, PgStore, Store};
use tourbooking_web::{routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("Starting tour booking API...");

    let store: Arc<dyn Store> = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(url)
                .await
                .context("failed to connect to database")?;
            info!("Connected to database");
            Arc::new(PgStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set, using in-memory store");
            Arc::new(InMemoryStore::new())
        }
    };

    let state = AppState::new(store, AppCache::new(config.package_cache_ttl), &config.currency);
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
