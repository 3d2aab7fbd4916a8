//! HTTP server module for the mini-app backend.
//!
//! This module provides an axum-based HTTP server exposing the read-only
//! group data as a small REST API. Handlers delegate to the service layer
//! and the injected data source; every response is wrapped in the
//! success/failure envelope the mini-app frontend consumes.

#[cfg(feature = "http-server")]
pub mod handlers;

#[cfg(feature = "http-server")]
pub mod router;

#[cfg(feature = "http-server")]
pub mod state;

#[cfg(feature = "http-server")]
pub mod error;

#[cfg(feature = "http-server")]
pub mod dto;

#[cfg(feature = "http-server")]
pub use router::create_router;

#[cfg(feature = "http-server")]
pub use state::AppState;
