//! Error types for group data sources.

/// Result type for source reads.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for source reads.
///
/// The bundled fixture source never fails; these variants exist for source
/// implementations that talk to a real upstream.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// The upstream data source could not be reached or returned bad data.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Unexpected internal fault while producing the data.
    #[error("internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Create an upstream error.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
