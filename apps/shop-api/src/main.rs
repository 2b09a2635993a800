//! Shop API - REST server for the product catalog

use axum_helpers::server::{close_postgres, create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        environment = ?config.environment,
        tls = ?config.database.tls,
        "Connecting to PostgreSQL"
    );
    let db = database::postgres::connect_from_config(config.database.clone()).await?;

    let state = AppState {
        config: config.clone(),
        db,
    };

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router_with_docs(api_routes, openapi::openapi(&config.server))?;
    let app = router
        .merge(health_router(config.app.clone()))
        .merge(api::health::router(state.clone()));

    info!(
        "Starting {} v{} on port {} (docs at {}/api-docs)",
        config.app.name,
        config.app.version,
        config.server.port,
        config.server.local_url()
    );

    let db = state.db.clone();
    create_production_app(app, &config.server, Duration::from_secs(30), async move {
        info!("Shutting down: closing PostgreSQL pool");
        close_postgres(db, "shop").await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Shop API shutdown complete");
    Ok(())
}
