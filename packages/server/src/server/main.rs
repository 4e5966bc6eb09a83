// Main entry point for the lead server

use anyhow::{Context, Result};
use lead_core::domains::leads::{LeadPipeline, LeadStore, PipelineSettings};
use lead_core::kernel::{start_scheduler, ServerDeps};
use lead_core::{server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,lead_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting lead enrichment server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    let deps = ServerDeps::from_config(&config).context("Failed to create provider clients")?;
    let store = LeadStore::with_error_capacity(config.error_log_capacity);
    let pipeline = LeadPipeline::new(deps, store.clone(), PipelineSettings::from_config(&config));

    // First cycle runs before the server accepts requests
    tracing::info!("Running initial lead update");
    let outcome = pipeline.run_cycle().await;
    tracing::info!(?outcome, "Initial lead update finished");

    let _scheduler = start_scheduler(pipeline, config.update_interval)
        .await
        .context("Failed to start scheduler")?;

    // Build application
    let app = build_app(store);

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
