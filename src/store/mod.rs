//! Read-only data sources for the group mini-app.
//!
//! The store follows a small repository pattern: handlers depend on source
//! traits and receive an injected implementation, so fixture data can later
//! be replaced by a live upstream without touching the HTTP layer.
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                 │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │  Service Layer (services.rs)                │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │  Source Traits (store/source.rs)            │
//! │  - FixtureSource (in-memory, bundled data)  │
//! └─────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod fixtures;
pub mod source;

pub use error::{StoreError, StoreResult};
pub use fixtures::{FixtureSource, GROUP};
pub use source::{BoardSource, FullSource, GroupInfoSource, ScheduleSource};
