//! Dealboard - Bitrix24 sales dashboard backend
//!
//! Main entry point for the HTTP server.

use std::sync::Arc;

use anyhow::Context;
use dealboard_api::{router, AppContext};
use dealboard_infra::{config, init_tracing};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();

    let config = config::load().context("failed to load configuration")?;
    init_tracing(&config.logging).context("failed to initialize logging")?;

    match dotenv {
        Ok(path) => info!(path = %path.display(), "Loaded .env"),
        Err(err) => warn!(error = %err, "Could not load .env file"),
    }

    let context = Arc::new(AppContext::new(&config).context("failed to build application context")?);
    let app = router(context);

    let listener = TcpListener::bind(&config.server.bind_address)
        .await
        .with_context(|| format!("failed to bind {}", config.server.bind_address))?;
    info!(addr = %config.server.bind_address, "Dealboard listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Dealboard stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
