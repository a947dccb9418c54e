//! HTTP server for the alert enrichment relay.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use enrichment::{AlertPayload, EnrichError, Enricher};

use crate::forwarder::Forwarder;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Alert enricher.
    pub enricher: Arc<Enricher>,
    /// Outbound forwarder.
    pub forwarder: Arc<Forwarder>,
}

/// Build the HTTP router for the relay service.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/alert", post(alert_handler))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Client error carrying a `detail` message, rendered as JSON.
struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }
}

impl From<EnrichError> for ApiError {
    fn from(err: EnrichError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

/// Alert webhook handler.
///
/// Parses the body, enriches every alert, kicks off the optional
/// downstream forward, and returns the enriched payload in the same shape
/// as the input. Forwarding outcome never changes this response.
async fn alert_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    debug!(body = %String::from_utf8_lossy(&body), "Raw alert payload");

    let value: Value = serde_json::from_slice(&body)
        .map_err(EnrichError::from)
        .map_err(|e| {
            warn!(error = %e, "Rejected unparseable alert payload");
            ApiError::from(e)
        })?;

    let payload = AlertPayload::classify(value).map_err(|e| {
        warn!(error = %e, "Rejected alert payload with invalid shape");
        ApiError::from(e)
    })?;

    info!(alert_count = payload.alerts().len(), "Received alert payload");

    let enriched = state.enricher.enrich_payload(payload);

    // Downstream always gets the flat array, never the envelope.
    state.forwarder.dispatch(enriched.alerts().to_vec());

    Ok(Json(enriched.into_value()))
}

/// Liveness check endpoint.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// Readiness check endpoint.
///
/// The outbound client is constructed before the server starts, so a
/// responding process is ready; the body reports whether forwarding is on.
async fn readiness_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ready",
        "forwarding_enabled": state.forwarder.enabled(),
    }))
}
