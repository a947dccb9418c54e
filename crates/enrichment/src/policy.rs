//! Enrichment policy configuration.

use std::env;

/// Label values applied to every alert, sourced from the environment at
/// startup and immutable for the life of the process.
#[derive(Debug, Clone)]
pub struct EnrichmentPolicy {
    /// Value for the `itsm_environment` label.
    pub host_environment: String,
    /// Value for the `namespace` label.
    pub namespace: String,
    /// Value for the `cluster_name` label.
    pub cluster_name: String,
    /// Value for the `itsm_app_id` label.
    pub itsm_app_id: String,
    /// Value for the `itsm_contract_id` label.
    pub itsm_contract_id: String,
    /// Forced `itsm_event_id`; when unset a random id is drawn per alert.
    pub itsm_event_id: Option<String>,
}

impl Default for EnrichmentPolicy {
    fn default() -> Self {
        Self {
            host_environment: env::var("HOST_ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            namespace: env::var("ALERT_NAMESPACE").unwrap_or_else(|_| "monitoring".to_string()),
            cluster_name: env::var("CLUSTER_NAME")
                .unwrap_or_else(|_| "unknown-cluster".to_string()),
            itsm_app_id: env::var("ITSM_APP_ID").unwrap_or_else(|_| "APPD-212426".to_string()),
            itsm_contract_id: env::var("ITSM_CONTRACT_ID")
                .unwrap_or_else(|_| "10APP11846700".to_string()),
            itsm_event_id: env::var("ITSM_EVENT_ID").ok().filter(|s| !s.is_empty()),
        }
    }
}
