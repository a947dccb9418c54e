//! Configuration for the relay service.

use std::env;

use enrichment::EnrichmentPolicy;

/// Relay process configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server to.
    pub bind: String,
    /// HTTP server port.
    pub port: u16,
    /// Downstream alert manager URL; forwarding is disabled when unset.
    pub alertmanager_url: Option<String>,
    /// Timeout for the outbound forward call, in seconds.
    pub forward_timeout_secs: u64,
    /// Label policy applied to every alert.
    pub policy: EnrichmentPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: env::var("HOST_BIND").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("RELAY_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            alertmanager_url: env::var("ALERTMANAGER_URL").ok().filter(|s| !s.is_empty()),
            forward_timeout_secs: 5,
            policy: EnrichmentPolicy::default(),
        }
    }
}
