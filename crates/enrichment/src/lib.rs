//! Alert normalization and enrichment policy.
//!
//! This crate implements the decision logic of the alert relay: for each
//! incoming alert, which labels are mandatory, which are conditional, and
//! how upstream severity vocabularies map onto the controlled ones.
//!
//! # Usage
//!
//! ```no_run
//! use enrichment::{AlertPayload, Enricher, EnrichmentPolicy};
//!
//! let enricher = Enricher::new(EnrichmentPolicy::default());
//!
//! let body: serde_json::Value =
//!     serde_json::from_str(r#"[{"labels":{"severity":"warning"}}]"#).unwrap();
//! let payload = AlertPayload::classify(body).unwrap();
//! let enriched = enricher.enrich_payload(payload);
//! ```
//!
//! # Architecture
//!
//! - [`Severity`] and [`ItsmSeverity`] are two independently specified
//!   severity vocabularies; they serve different downstream consumers and
//!   are deliberately not unified.
//! - [`AlertPayload`] classifies an inbound JSON document as either a bare
//!   alert array or a wrapped envelope, and rebuilds the same shape.
//! - [`Enricher`] applies the label policy to every alert in a payload.
//!
//! Everything here is synchronous pure computation; no network, no async.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod enrich;
pub mod error;
pub mod event_id;
pub mod payload;
pub mod policy;
pub mod severity;

pub use enrich::Enricher;
pub use error::EnrichError;
pub use event_id::generate_event_id;
pub use payload::{Alert, AlertPayload};
pub use policy::EnrichmentPolicy;
pub use severity::{ItsmSeverity, Severity};
