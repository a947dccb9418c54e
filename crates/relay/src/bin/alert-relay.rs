//! Alert relay binary.
//!
//! Standalone HTTP service that enriches monitoring alert webhooks and
//! optionally forwards them to a downstream alert manager.

use anyhow::{Context, Result};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use enrichment::Enricher;
use relay::{build_router, AppState, Config, Forwarder};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("relay=info".parse()?))
        .init();

    info!("Starting alert relay service...");

    // Load configuration
    let config = Config::default();

    // Outbound client: created once here, shared for the process lifetime
    let forwarder =
        Arc::new(Forwarder::new(&config).context("Failed to build outbound HTTP client")?);

    let state = AppState {
        enricher: Arc::new(Enricher::new(config.policy.clone())),
        forwarder,
    };

    let app = build_router(state);

    let ip: IpAddr = config
        .bind
        .parse()
        .with_context(|| format!("Invalid HOST_BIND address: {}", config.bind))?;
    let addr = SocketAddr::from((ip, config.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(port = config.port, "Alert relay listening");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
