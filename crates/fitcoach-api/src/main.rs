// Fitcoach API server
// Decision: All configuration comes from the environment (.env honoured for local runs)
// Decision: Spreadsheet is resolved before binding, so a bad sheet setup fails startup

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use fitcoach_api::{build_router, ApiConfig, CoachServices};
use fitcoach_openai::OpenAICompletionDriver;
use fitcoach_sheets::SheetsWorkoutLog;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Missing .env is fine; real deployments set variables directly
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fitcoach_api=debug,fitcoach_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("fitcoach-api starting...");

    let config = ApiConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(
        openai = ?config.openai,
        spreadsheet = ?config.sheets.spreadsheet,
        worksheet = ?config.sheets.worksheet,
        "Configuration loaded"
    );

    // Completion provider
    let driver = match &config.openai.api_url {
        Some(url) => OpenAICompletionDriver::with_base_url(&config.openai.api_key, url),
        None => OpenAICompletionDriver::new(&config.openai.api_key),
    }
    .with_model(&config.openai.model)
    .with_timeout(config.openai.timeout)
    .context("Failed to create OpenAI driver")?;

    // Workout log
    let workout_log = SheetsWorkoutLog::connect(&config.sheets)
        .await
        .context("Failed to open workout log spreadsheet")?;

    let services = CoachServices::new(Arc::new(driver), Arc::new(workout_log), &config.coach);

    if !config.api_prefix.is_empty() {
        tracing::info!(prefix = %config.api_prefix, "API prefix configured");
    }

    let app = build_router(&services, &config.api_prefix);

    let cors_origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    // Add CORS layer only if origins are configured
    let app = if cors_origins.is_empty() {
        tracing::info!("CORS not configured (same-origin requests only)");
        app
    } else {
        tracing::info!(origins = ?cors_origins, "CORS origins configured");
        app.layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(cors_origins))
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]),
        )
    };

    // Start server
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
