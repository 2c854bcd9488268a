// Main entry point for API server

use anyhow::{Context, Result};
use server_core::{kernel::ServerDeps, server::build_app, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    tracing::info!("Starting Cold Format API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Debug: log masked credentials for deployment troubleshooting
    fn mask(value: Option<&str>) -> String {
        match value {
            Some(val) => {
                let show = val.char_indices().nth(4).map(|(i, _)| i).unwrap_or(val.len());
                format!("{}{}", &val[..show], "*".repeat(val.chars().count().saturating_sub(4)))
            }
            None => "NOT SET".to_string(),
        }
    }
    for name in [
        server_core::GROQ_API_KEY,
        server_core::OPENAI_API_KEY,
        server_core::RESEND_API_KEY,
    ] {
        tracing::info!("  {}: {}", name, mask(config.credential(name)));
    }

    let deps = ServerDeps::from_config(&config);
    match deps.ai_provider_name() {
        Some(provider) => tracing::info!(provider, "Using LLM provider"),
        None => tracing::warn!("No LLM API key set; /analyze will fail"),
    }
    if deps.mailer.is_none() {
        tracing::warn!("RESEND_API_KEY not set; /feedback will fail");
    }

    // Build application
    let app = build_app(deps);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("API server running on http://localhost:{}", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
