use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use common::env::ensure_data_dir;
use configs::AppConfig;
use service::{storage::JsonFileStore, CatalogService};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, auth};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load and validate configuration: `CONFIG_PATH` file first, environment otherwise.
pub fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Shared handler state backed by JSON files under `cfg.storage.data_dir`.
pub fn build_state(cfg: &AppConfig) -> auth::ServerState {
    let store = JsonFileStore::new(&cfg.storage.data_dir);
    auth::ServerState {
        catalog: Arc::new(CatalogService::new(Arc::new(store))),
        auth: auth::ServerAuthConfig { admin_token: cfg.auth.admin_token.clone() },
    }
}

pub fn build_app(state: auth::ServerState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("received Ctrl+C, shutting down");
    }
}

/// Build the app and serve it until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    ensure_data_dir(&cfg.storage.data_dir).await?;

    let app = build_app(build_state(&cfg));

    let addr: SocketAddr = cfg
        .bind_addr()
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {}: {}", cfg.bind_addr(), e)))?;
    info!(%addr, data_dir = %cfg.storage.data_dir, "starting library api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
