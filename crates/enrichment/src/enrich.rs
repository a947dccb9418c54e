//! The alert enricher.
//!
//! Applies the label policy to every alert in a payload: static labels,
//! severity normalization, ITSM labels, and the cluster/metadata labels.
//! Pure computation over the alert plus the [`EnrichmentPolicy`].

use crate::event_id::generate_event_id;
use crate::payload::{Alert, AlertPayload};
use crate::policy::EnrichmentPolicy;
use crate::severity::{ItsmSeverity, Severity};

/// `enriched_by` label value identifying this service.
pub const ENRICHED_BY: &str = "alert-relay";

/// `annotations.processed_at` value. A constant tag, not a timestamp,
/// per the integration contract.
pub const PROCESSED_AT_TAG: &str = "enriched";

/// Applies the enrichment policy to alerts.
#[derive(Debug, Clone)]
pub struct Enricher {
    policy: EnrichmentPolicy,
}

impl Enricher {
    /// Create an enricher for the given policy.
    #[must_use]
    pub fn new(policy: EnrichmentPolicy) -> Self {
        Self { policy }
    }

    /// Enrich every alert in a payload, preserving its shape.
    #[must_use]
    pub fn enrich_payload(&self, payload: AlertPayload) -> AlertPayload {
        payload.map_alerts(|alert| self.enrich_alert(alert))
    }

    /// Enrich a single alert.
    ///
    /// The original `labels.severity` is captured before any mutation: the
    /// ITSM mapper must see the pre-normalization token when one exists.
    #[must_use]
    pub fn enrich_alert(&self, mut alert: Alert) -> Alert {
        let original_severity = alert.labels.get("severity").cloned();

        let labels = &mut alert.labels;

        // Static labels
        labels.insert("integration".to_string(), "external".to_string());
        labels.insert("itsm_enabled".to_string(), "true".to_string());
        labels.insert(
            "itsm_environment".to_string(),
            self.policy.host_environment.clone(),
        );
        labels.insert("teams_enabled".to_string(), "false".to_string());
        labels.insert("namespace".to_string(), self.policy.namespace.clone());

        let normalized = Severity::normalize(original_severity.as_deref());
        labels.insert("severity".to_string(), normalized.as_str().to_string());

        // ITSM labels; itsm_enabled is always true in this policy
        labels.insert("itsm_app_id".to_string(), self.policy.itsm_app_id.clone());
        labels.insert(
            "itsm_contract_id".to_string(),
            self.policy.itsm_contract_id.clone(),
        );
        let event_id = self
            .policy
            .itsm_event_id
            .clone()
            .unwrap_or_else(generate_event_id);
        labels.insert("itsm_event_id".to_string(), event_id);

        let itsm_input = original_severity.as_deref().unwrap_or(normalized.as_str());
        labels.insert(
            "itsm_severity".to_string(),
            ItsmSeverity::from_raw(itsm_input).as_str().to_string(),
        );

        // Dynamic + metadata labels
        labels.insert("cluster_name".to_string(), self.policy.cluster_name.clone());
        labels.insert("enriched_by".to_string(), ENRICHED_BY.to_string());

        alert
            .annotations
            .insert("processed_at".to_string(), PROCESSED_AT_TAG.to_string());

        alert
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_id::EVENT_ID_LEN;
    use serde_json::json;

    fn test_policy() -> EnrichmentPolicy {
        EnrichmentPolicy {
            host_environment: "development".to_string(),
            namespace: "monitoring".to_string(),
            cluster_name: "unknown-cluster".to_string(),
            itsm_app_id: "APPD-212426".to_string(),
            itsm_contract_id: "10APP11846700".to_string(),
            itsm_event_id: None,
        }
    }

    fn label<'a>(alert: &'a Alert, key: &str) -> &'a str {
        alert.labels.get(key).map(String::as_str).unwrap_or("")
    }

    #[test]
    fn test_static_labels_applied() {
        let enricher = Enricher::new(test_policy());
        let alert = enricher.enrich_alert(Alert::default());

        assert_eq!(label(&alert, "integration"), "external");
        assert_eq!(label(&alert, "itsm_enabled"), "true");
        assert_eq!(label(&alert, "itsm_environment"), "development");
        assert_eq!(label(&alert, "teams_enabled"), "false");
        assert_eq!(label(&alert, "namespace"), "monitoring");
        assert_eq!(label(&alert, "cluster_name"), "unknown-cluster");
        assert_eq!(label(&alert, "enriched_by"), ENRICHED_BY);
        assert_eq!(
            alert.annotations.get("processed_at").map(String::as_str),
            Some(PROCESSED_AT_TAG)
        );
    }

    #[test]
    fn test_missing_severity_defaults() {
        let enricher = Enricher::new(test_policy());
        let alert = enricher.enrich_alert(Alert::default());

        assert_eq!(label(&alert, "severity"), "info");
        assert_eq!(label(&alert, "itsm_severity"), "MINOR");
    }

    #[test]
    fn test_severity_normalized_and_itsm_sees_original() {
        let enricher = Enricher::new(test_policy());

        // `high` normalizes to `other` internally but the ITSM mapper sees
        // the original token, where `high` is MAJOR.
        let mut alert = Alert::default();
        alert.labels.insert("severity".to_string(), "high".to_string());
        let alert = enricher.enrich_alert(alert);

        assert_eq!(label(&alert, "severity"), "other");
        assert_eq!(label(&alert, "itsm_severity"), "MAJOR");
    }

    #[test]
    fn test_enriched_severities_are_canonical() {
        let enricher = Enricher::new(test_policy());
        for raw in ["critical", "P2", " sev3 ", "high", "weird", ""] {
            let mut alert = Alert::default();
            alert.labels.insert("severity".to_string(), raw.to_string());
            let alert = enricher.enrich_alert(alert);

            assert!(
                ["critical", "warning", "info", "other"].contains(&label(&alert, "severity")),
                "raw={raw}"
            );
            assert!(
                ["CRITICAL", "MAJOR", "MINOR"].contains(&label(&alert, "itsm_severity")),
                "raw={raw}"
            );
        }
    }

    #[test]
    fn test_forced_event_id_is_uniform() {
        let mut policy = test_policy();
        policy.itsm_event_id = Some("AB123".to_string());
        let enricher = Enricher::new(policy);

        let payload = AlertPayload::classify(json!([{}, {}, {}])).unwrap();
        let enriched = enricher.enrich_payload(payload);

        for alert in enriched.alerts() {
            assert_eq!(label(alert, "itsm_event_id"), "AB123");
        }
    }

    #[test]
    fn test_random_event_ids_are_well_formed() {
        let enricher = Enricher::new(test_policy());
        let payload = AlertPayload::classify(json!([{}, {}])).unwrap();
        let enriched = enricher.enrich_payload(payload);

        for alert in enriched.alerts() {
            let id = label(alert, "itsm_event_id");
            assert_eq!(id.len(), EVENT_ID_LEN);
            assert!(id.chars().all(|c| c.is_ascii_uppercase()), "{id}");
        }
    }

    #[test]
    fn test_envelope_meta_survives_enrichment() {
        let enricher = Enricher::new(test_policy());
        let payload = AlertPayload::classify(json!({
            "groupKey": "g1",
            "alerts": [{"labels": {"severity": "warning"}}]
        }))
        .unwrap();

        let value = enricher.enrich_payload(payload).into_value();
        assert_eq!(value["groupKey"], json!("g1"));
        let alerts = value["alerts"].as_array().unwrap();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0]["labels"]["severity"], json!("warning"));
        assert_eq!(alerts[0]["labels"]["itsm_severity"], json!("MAJOR"));
    }

    #[test]
    fn test_unrelated_fields_untouched() {
        let enricher = Enricher::new(test_policy());
        let payload = AlertPayload::classify(json!([{
            "labels": {"severity": "critical", "team": "core"},
            "annotations": {"summary": "disk full"},
            "fingerprint": "abc123"
        }]))
        .unwrap();

        let value = enricher.enrich_payload(payload).into_value();
        assert_eq!(value[0]["fingerprint"], json!("abc123"));
        assert_eq!(value[0]["labels"]["team"], json!("core"));
        assert_eq!(value[0]["annotations"]["summary"], json!("disk full"));
    }
}
