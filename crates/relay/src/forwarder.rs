//! Outbound delivery to the downstream alert manager.
//!
//! The forwarder always sends the flat enriched alert array, never the
//! envelope wrapper. Delivery is fire-and-forget: failures are logged and
//! never surface to the original caller.

use std::time::Duration;

use enrichment::Alert;
use thiserror::Error;
use tracing::{debug, error, info};

use crate::config::Config;

/// `User-Agent` header sent on forwarded requests.
const USER_AGENT: &str = concat!("alert-relay/", env!("CARGO_PKG_VERSION"));

/// Errors that can occur when forwarding alerts downstream.
#[derive(Debug, Error)]
pub enum ForwardError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Downstream returned a non-success status
    #[error("downstream returned {0}")]
    Status(reqwest::StatusCode),
}

/// Shared outbound HTTP client with an optional destination.
///
/// Constructed once at startup; the underlying `reqwest::Client` is safe
/// for concurrent use by all in-flight requests, and cloning shares it.
#[derive(Clone)]
pub struct Forwarder {
    url: Option<String>,
    client: reqwest::Client,
}

impl Forwarder {
    /// Build the forwarder from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.forward_timeout_secs))
            .user_agent(USER_AGENT)
            .build()?;

        if let Some(url) = &config.alertmanager_url {
            info!(url = %url, "Alert forwarding enabled");
        } else {
            info!("Alert forwarding disabled (ALERTMANAGER_URL not set)");
        }

        Ok(Self {
            url: config.alertmanager_url.clone(),
            client,
        })
    }

    /// Whether a forwarding destination is configured.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.url.is_some()
    }

    /// POST the flat alert array to the configured destination.
    ///
    /// # Errors
    ///
    /// Returns [`ForwardError`] on connection failure, timeout, or a
    /// non-2xx downstream status.
    pub async fn forward(&self, alerts: &[Alert]) -> Result<(), ForwardError> {
        let Some(url) = &self.url else {
            return Ok(());
        };

        let response = self.client.post(url).json(alerts).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ForwardError::Status(status));
        }

        Ok(())
    }

    /// Forward alerts in the background (fire-and-forget).
    ///
    /// Spawns a task and returns immediately; the caller's response never
    /// depends on the outcome. Failures are logged only.
    pub fn dispatch(&self, alerts: Vec<Alert>) {
        if !self.enabled() {
            return;
        }

        let forwarder = self.clone();
        tokio::spawn(async move {
            match forwarder.forward(&alerts).await {
                Ok(()) => {
                    debug!(alert_count = alerts.len(), "Forwarded alerts downstream");
                }
                Err(e) => {
                    error!(error = %e, "Failed to forward alerts downstream");
                }
            }
        });
    }
}
