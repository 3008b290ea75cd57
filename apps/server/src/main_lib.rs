use std::sync::Arc;

use crate::config::{Config, LogFormat};
use asset_registry_core::assets::{AssetService, AssetServiceTrait};
use asset_registry_storage_sqlite::{assets::AssetRepository, db};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub asset_service: Arc<dyn AssetServiceTrait + Send + Sync>,
}

pub fn init_tracing(log_format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format == LogFormat::Json {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Opens the SQLite store at `config.db_path` and wires the asset service on top of it.
///
/// Must be called from within a Tokio runtime; the database writer runs as a task.
pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let pool = db::initialize(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let writer = db::spawn_writer((*pool).clone())?;
    let asset_repository = Arc::new(AssetRepository::new(pool, writer));
    let asset_service = Arc::new(AssetService::new(asset_repository));

    Ok(Arc::new(AppState { asset_service }))
}
