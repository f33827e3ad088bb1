// Main entry point for API server

use std::sync::Arc;

use anyhow::{Context, Result};
use gemini_client::GeminiClient;
use listing_core::domains::listings::{GeminiGenerator, ListingService};
use listing_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,listing_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Propcopy listing API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // The credential decides the generation mode once, at startup
    let listings = match &config.gemini_api_key {
        Some(api_key) => {
            tracing::info!(model = %config.gemini_model, "Gemini credential configured");
            let client =
                GeminiClient::new(api_key.clone()).with_model(config.gemini_model.clone());
            Arc::new(ListingService::new(Arc::new(GeminiGenerator::new(client))))
        }
        None => {
            tracing::warn!(
                "GEMINI_API_KEY not set, serving deterministic template listings"
            );
            Arc::new(ListingService::without_generator())
        }
    };

    // Build application
    let app = build_app(listings);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
