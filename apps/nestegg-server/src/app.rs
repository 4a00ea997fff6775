use anyhow::Context;
use axum::{Json, Router, routing::get};
use contribution_settings::ContributionSettingsModule;
use nestegg_api::build_cors_layer;
use retirement_projection::RetirementProjectionModule;
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::signals;

pub const HEALTH_PATH: &str = "/health";

/// Builds every module and merges their routes under one router.
///
/// Initializes the settings store, so the data file exists once this returns.
///
/// # Errors
/// Returns an error if the config is invalid or the settings file cannot be
/// created.
pub async fn build_app(config: &AppConfig) -> anyhow::Result<Router> {
    let cors = build_cors_layer(&config.cors).context("invalid cors section")?;

    let settings = ContributionSettingsModule::new(&config.contribution_settings);
    settings.init().await?;

    let projection =
        RetirementProjectionModule::new(&config.retirement_projection, settings.client())
            .context("invalid retirement_projection section")?;

    Ok(Router::new()
        .route(HEALTH_PATH, get(|| async { Json(json!({ "status": "ok" })) }))
        .merge(settings.router())
        .merge(projection.router())
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

/// Binds the configured address and serves until a shutdown signal arrives.
///
/// # Errors
/// Returns an error if startup fails or the listener cannot be bound.
pub async fn serve(config: &AppConfig) -> anyhow::Result<()> {
    let app = build_app(config).await?;

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    let local_addr = listener.local_addr().context("listener has no local address")?;
    tracing::info!(%local_addr, "Server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = signals::wait_for_shutdown().await {
                tracing::error!(error = %e, "Signal handling failed, shutting down");
            }
        })
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
