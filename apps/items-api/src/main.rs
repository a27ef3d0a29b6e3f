//! Items API - REST server over a volatile in-memory store

use axum::http::HeaderValue;
use axum_helpers::http::{create_cors_layer, create_permissive_cors_layer};
use axum_helpers::server::{create_production_app, create_router, ShutdownCoordinator};
use axum_helpers::{set_deployment_mode, DeploymentMode};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;

use config::{Config, Environment};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);
    set_deployment_mode(match config.environment {
        Environment::Production => DeploymentMode::Production,
        Environment::Development => DeploymentMode::Development,
    });

    let cors = match &config.cors_allowed_origins {
        Some(origins) => {
            let parsed = origins
                .iter()
                .map(|origin| origin.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| eyre::eyre!("Invalid CORS_ALLOWED_ORIGIN value: {}", e))?;
            info!("CORS restricted to origins: {}", origins.join(", "));
            create_cors_layer(parsed)
        }
        None => {
            info!("CORS_ALLOWED_ORIGIN not set, allowing any origin");
            create_permissive_cors_layer()
        }
    };

    let (coordinator, _rx) = ShutdownCoordinator::new();

    let api_routes = api::routes();
    let router = create_router::<openapi::ApiDoc>(
        &config.api_prefix,
        api_routes,
        cors,
        &config.rate_limit,
    );
    let app = router.merge(api::health::router(config.app, coordinator.clone()));

    info!(
        "Starting Items API on port {} (prefix {})",
        config.server.port, config.api_prefix
    );

    create_production_app(
        app,
        &config.server.address(),
        coordinator,
        Duration::from_secs(30),
        async move {
            // Nothing external to release; the store dies with the process.
            info!("Shutting down: dropping in-memory store");
        },
    )
    .await?;

    info!("Items API shutdown complete");
    Ok(())
}
