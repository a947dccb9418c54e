//! Alert model and payload shape detection.
//!
//! Upstream senders deliver alerts in one of two shapes: a bare JSON array
//! of alert objects, or a wrapped envelope object carrying an `alerts`
//! array plus sibling metadata (group keys, receiver, etc.). The response
//! must come back in the same shape, with envelope metadata preserved
//! verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::EnrichError;

/// One monitoring alert.
///
/// `labels` and `annotations` default to empty maps when absent in the
/// input; every other top-level field passes through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Alert {
    /// Alert labels
    #[serde(default)]
    pub labels: HashMap<String, String>,
    /// Alert annotations
    #[serde(default)]
    pub annotations: HashMap<String, String>,
    /// All remaining fields, preserved verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A classified inbound payload.
#[derive(Debug, Clone)]
pub enum AlertPayload {
    /// Bare array of alerts.
    Batch(Vec<Alert>),
    /// Envelope object: an `alerts` array plus sibling metadata keys,
    /// kept verbatim for reconstruction.
    Envelope {
        meta: Map<String, Value>,
        alerts: Vec<Alert>,
    },
}

impl AlertPayload {
    /// Classify a parsed JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`EnrichError::InvalidShape`] when the document is neither
    /// a bare array nor an object with an `alerts` array, or when an
    /// array element is not an alert-shaped object.
    pub fn classify(value: Value) -> Result<Self, EnrichError> {
        match value {
            Value::Array(items) => Ok(Self::Batch(parse_alerts(items)?)),
            Value::Object(mut map) => match map.remove("alerts") {
                Some(Value::Array(items)) => Ok(Self::Envelope {
                    meta: map,
                    alerts: parse_alerts(items)?,
                }),
                Some(_) => Err(EnrichError::InvalidShape(
                    "envelope key 'alerts' must hold an array".to_string(),
                )),
                None => Err(EnrichError::InvalidShape(
                    "payload must be an alert array or an envelope with an 'alerts' array"
                        .to_string(),
                )),
            },
            _ => Err(EnrichError::InvalidShape(
                "payload must be a JSON array or object".to_string(),
            )),
        }
    }

    /// The alert sequence, independent of shape.
    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        match self {
            Self::Batch(alerts) | Self::Envelope { alerts, .. } => alerts,
        }
    }

    /// Apply a transformation to every alert, preserving the shape.
    #[must_use]
    pub fn map_alerts<F>(self, f: F) -> Self
    where
        F: FnMut(Alert) -> Alert,
    {
        match self {
            Self::Batch(alerts) => Self::Batch(alerts.into_iter().map(f).collect()),
            Self::Envelope { meta, alerts } => Self::Envelope {
                meta,
                alerts: alerts.into_iter().map(f).collect(),
            },
        }
    }

    /// Rebuild the JSON document in the original shape.
    ///
    /// Envelope output re-attaches the alert array under `alerts` next to
    /// the preserved metadata keys; batch output is the bare array.
    #[must_use]
    pub fn into_value(self) -> Value {
        match self {
            Self::Batch(alerts) => serialize_alerts(alerts),
            Self::Envelope { mut meta, alerts } => {
                meta.insert("alerts".to_string(), serialize_alerts(alerts));
                Value::Object(meta)
            }
        }
    }
}

fn parse_alerts(items: Vec<Value>) -> Result<Vec<Alert>, EnrichError> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item)
                .map_err(|e| EnrichError::InvalidShape(format!("alert at index {i}: {e}")))
        })
        .collect()
}

fn serialize_alerts(alerts: Vec<Alert>) -> Value {
    // Alert serialization cannot fail: keys are strings, values are JSON.
    Value::Array(
        alerts
            .into_iter()
            .map(|a| serde_json::to_value(a).unwrap_or(Value::Null))
            .collect(),
    )
}
