//! Products API - product catalogue behind bearer tokens, plus user
//! registration and login.

use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::{info, warn};

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        max_connections = config.database.max_connections,
        "Connecting to PostgreSQL"
    );
    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await?;

    let state = AppState::new(config, db);
    let app = api::app(&state)?;

    info!(
        name = state.config.app.name,
        version = state.config.app.version,
        address = %state.config.server.address(),
        "Starting Products API"
    );

    let db = state.db.clone();
    create_production_app(app, &state.config.server, SHUTDOWN_TIMEOUT, async move {
        info!("Shutting down: closing PostgreSQL pool");
        if let Err(e) = db.close().await {
            warn!(error = %e, "Failed to close PostgreSQL pool cleanly");
        }
    })
    .await?;

    info!("Products API shutdown complete");
    Ok(())
}
