//! Error types for the enrichment core.

use thiserror::Error;

/// Errors raised while classifying or enriching an alert payload.
///
/// Both variants are client errors at the HTTP boundary: they abort the
/// request before any enrichment is attempted.
#[derive(Debug, Error)]
pub enum EnrichError {
    /// Request body is not valid JSON
    #[error("invalid JSON payload: {0}")]
    MalformedJson(#[from] serde_json::Error),

    /// Parsed JSON is neither an alert array nor an envelope
    #[error("invalid payload shape: {0}")]
    InvalidShape(String),
}
