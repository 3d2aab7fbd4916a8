//! Application state for the HTTP server.

use std::sync::Arc;

use crate::store::{self, FixtureSource, FullSource};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Injected data source backing every read endpoint.
    pub source: Arc<dyn FullSource>,
    /// Fixed identifier of the group this deployment serves.
    pub group: String,
}

impl AppState {
    /// Create a new application state with the given source and group.
    pub fn new(source: Arc<dyn FullSource>, group: impl Into<String>) -> Self {
        Self {
            source,
            group: group.into(),
        }
    }

    /// State backed by the bundled fixture data.
    pub fn with_fixtures() -> Self {
        Self::new(Arc::new(FixtureSource::new()), store::GROUP)
    }
}
