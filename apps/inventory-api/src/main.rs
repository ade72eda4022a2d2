use axum::middleware;
use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use database::postgres;
use migration::Migrator;
use std::time::Duration;
use tracing::info;

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
    observability::init_metrics()?;

    info!(
        app = config.app.name,
        version = config.app.version,
        "Connecting to PostgreSQL"
    );

    let db = postgres::connect_from_config_with_retry(config.database.clone(), None).await?;
    postgres::run_migrations::<Migrator>(&db, config.app.name).await?;

    let state = AppState { config, db };

    let api_routes = api::routes(&state);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes).await?;

    // Outermost so 404/405 fallbacks are counted too
    let app = router
        .merge(health_router(state.config.app))
        .layer(middleware::from_fn(observability::metrics_middleware));

    info!(
        "Starting Inventory API with graceful shutdown ({}s timeout)",
        SHUTDOWN_TIMEOUT.as_secs()
    );

    let db = state.db.clone();
    create_production_app(app, &state.config.server, SHUTDOWN_TIMEOUT, async move {
        info!("Shutting down: closing PostgreSQL pool");
        match db.close().await {
            Ok(()) => info!("PostgreSQL pool closed"),
            Err(e) => tracing::error!(error = %e, "Failed to close PostgreSQL pool"),
        }
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Inventory API shutdown complete");
    Ok(())
}
