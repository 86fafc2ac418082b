use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use api_shared::HealthService;
use carecheck_core::CoreConfig;
use carecheck_core::config::{
    catalog_path_from_env_value, language_from_env_value, rest_addr_from_env_value,
};
use carecheck_core::constants::{CATALOG_PATH_ENV, LANGUAGE_ENV, REST_ADDR_ENV};

/// Main entry point for the CareCheck application
///
/// Resolves configuration from the environment (and `.env`), loads the catalog once and serves
/// the REST API with Swagger UI until interrupted.
///
/// # Environment Variables
/// - `CARECHECK_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `CARECHECK_CATALOG`: Catalog YAML overriding the built-in one
/// - `CARECHECK_LANGUAGE`: Default response language (default: "en")
///
/// # Returns
/// * `Ok(())` - If the server shuts down cleanly
/// * `Err(anyhow::Error)` - If configuration, catalog loading or the server fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("carecheck_run=info".parse()?)
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
    let kb = state.knowledge();
    if kb.diseases().is_empty() {
        anyhow::bail!("catalog contains no diseases; nothing to diagnose against");
    }
    tracing::info!(
        symptoms = kb.symptoms().len(),
        diseases = kb.diseases().len(),
        medicines = kb.medicines().len(),
        "catalog loaded"
    );
    tracing::info!("{}", HealthService::check_health().message);
    tracing::info!("++ Starting CareCheck REST on {}", cfg.rest_addr());

    let listener = tokio::net::TcpListener::bind(cfg.rest_addr()).await?;
    axum::serve(listener, api_rest::app(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("-- Shutting down CareCheck REST");
        })
        .await?;

    Ok(())
}
