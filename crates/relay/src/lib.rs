//! Alert enrichment relay service.
//!
//! Thin HTTP plumbing around the [`enrichment`] core: an axum server that
//! receives alert webhooks, enriches them, returns the result to the
//! caller, and optionally forwards the flat alert array to a downstream
//! alert manager in a fire-and-forget fashion.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod forwarder;
pub mod server;

pub use config::Config;
pub use forwarder::{ForwardError, Forwarder};
pub use server::{build_router, AppState};
