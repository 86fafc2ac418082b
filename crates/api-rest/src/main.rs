//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful during development when you want the REST server with Swagger UI and nothing else. The
//! workspace's `carecheck-run` binary serves the same application.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use carecheck_core::config::{
    catalog_path_from_env_value, language_from_env_value, rest_addr_from_env_value,
};
use carecheck_core::constants::{CATALOG_PATH_ENV, LANGUAGE_ENV, REST_ADDR_ENV};
use carecheck_core::CoreConfig;

/// Main entry point for the CareCheck REST API server
///
/// Starts the REST API server on the configured address (default: 0.0.0.0:3000).
///
/// # Environment Variables
/// - `CARECHECK_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `CARECHECK_CATALOG`: Catalog YAML overriding the built-in one
/// - `CARECHECK_LANGUAGE`: Default response language (default: "en")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid or the catalog fails to load,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CoreConfig::new(
        catalog_path_from_env_value(std::env::var(CATALOG_PATH_ENV).ok())?,
        rest_addr_from_env_value(std::env::var(REST_ADDR_ENV).ok()),
        language_from_env_value(std::env::var(LANGUAGE_ENV).ok())?,
    )?;

    let state = AppState::from_config(&cfg)?;
    tracing::info!(
        symptoms = state.knowledge().symptoms().len(),
        diseases = state.knowledge().diseases().len(),
        medicines = state.knowledge().medicines().len(),
        "catalog loaded"
    );

    tracing::info!("-- Starting CareCheck REST API on {}", cfg.rest_addr());

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, api_rest::app(state)).await?;

    Ok(())
}
