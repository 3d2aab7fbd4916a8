//! # Unigroup Backend
//!
//! Read-only backend for the university group mini-app embedded in the
//! chat-platform shell.
//!
//! The crate serves four informational views for one student group: the
//! weekly class schedule, the homework board, group contact info and
//! notifications. All content is fixture data held in memory; there are no
//! write operations and no persistence. The backend exposes a small REST
//! API via Axum for the mini-app frontend.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Serializable domain types (lessons, schedule, boards)
//! - [`store`]: Source traits and the in-memory fixture implementation
//! - [`services`]: Thin read orchestration between HTTP and the sources
//! - [`http`]: Axum-based HTTP server, envelopes and request handlers
//! - [`host`]: Optional capability interface toward the embedding shell

pub mod host;
pub mod models;
pub mod services;
pub mod store;

#[cfg(feature = "http-server")]
pub mod http;
