use std::{net::SocketAddr, path::Path};

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::{AppConfig, StorageBackend};
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// The complete HTTP application over the given services.
pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// `config.toml` (or `CONFIG_PATH`) when it exists, otherwise environment variables.
fn load_config() -> Result<AppConfig, StartupError> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    if Path::new(&path).exists() {
        return AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(format!("{path}: {e:#}")));
    }
    info!(%path, "config file not found, using environment");
    let mut cfg = AppConfig::from_env();
    cfg.normalize_and_validate()
        .map_err(|e| StartupError::InvalidConfig(format!("{e:#}")))?;
    Ok(cfg)
}

async fn build_state(cfg: &AppConfig) -> Result<AppState, StartupError> {
    match cfg.storage.backend {
        StorageBackend::Memory => {
            warn!("in-memory storage selected; records are lost on restart");
            Ok(AppState::in_memory())
        }
        StorageBackend::Database => {
            let db_cfg = models::db::DatabaseConfig::from(&cfg.database);
            let db = models::db::connect_with_config(&db_cfg)
                .await
                .map_err(|e| StartupError::Database(format!("{e:#}")))?;
            if cfg.storage.run_migrations {
                migration::Migrator::up(&db, None)
                    .await
                    .map_err(|e| StartupError::Migration(e.to_string()))?;
                info!("migrations applied");
            }
            Ok(AppState::seaorm(db))
        }
    }
}

/// Public entry: load config, wire storage, run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let cfg = load_config()?;
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, backend = ?cfg.storage.backend, "starting smart warehouse server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
