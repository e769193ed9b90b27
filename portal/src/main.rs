//! Main entry point for the PHC staff portal service.
//!
//! Loads configuration, restores the persisted session and serves the
//! authentication, navigation and pharmacy endpoints.

use std::sync::Arc;

use anyhow::Context;
use phc_portal::api;
use phc_portal::auth::credentials::StaticCredentialStore;
use phc_portal::auth::session::{FixedLatency, SessionManager};
use phc_portal::config::Config;
use phc_portal::storage::FileStorage;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let storage = FileStorage::open(&config.storage_dir)
        .with_context(|| format!("opening {}", config.storage_dir.display()))?;

    let manager = Arc::new(SessionManager::new(
        Arc::new(StaticCredentialStore::demo()),
        Arc::new(storage),
        Arc::new(FixedLatency(config.login_latency())),
    ));
    manager.restore();

    let app = api::app(manager);

    let bind_address = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("binding {bind_address}"))?;

    info!("Starting PHC portal on port {}", config.server_port);
    axum::serve(listener, app).await?;
    Ok(())
}
