//! Service entry point.

use anyhow::Context;
use axum::{routing::get, Json};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use bufferbros_pricing::config::AppConfig;
use bufferbros_pricing::pricing::{self, PricingSettings};
use bufferbros_pricing::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,bufferbros_pricing=debug,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = AppConfig::from_env();

    // Fail fast if the split shares or rate thresholds disagree.
    let settings = PricingSettings::default();
    settings
        .validate()
        .context("pricing settings are inconsistent")?;

    let state = AppState::new(settings);

    let app = pricing::router()
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                .layer(CompressionLayer::new()),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    tracing::info!("Pricing service listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
