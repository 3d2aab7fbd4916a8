//! HTTP error handling and the failure envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Failure envelope body: `{ "success": false, "error": "..." }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    /// Human-readable error message, never empty.
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        let mut error = error.into();
        if error.is_empty() {
            error = "internal error".to_string();
        }
        Self {
            success: false,
            error,
        }
    }
}

/// Application error type for HTTP handlers.
///
/// Every variant maps to the same wire shape: the boundary catches the
/// fault, and the caller only ever sees the failure envelope with status
/// 500, never a propagated panic or a bare error string.
#[derive(Debug)]
pub enum AppError {
    /// Data source failure during a read.
    Source(StoreError),
    /// Any other unexpected fault.
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::Source(err) => err.to_string(),
            AppError::Internal(msg) => msg,
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new(message)),
        )
            .into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::Source(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_is_failure_tagged() {
        let body = ErrorBody::new("upstream error: offline");
        assert!(!body.success);
        assert_eq!(body.error, "upstream error: offline");
    }

    #[test]
    fn test_error_body_never_empty() {
        let body = ErrorBody::new("");
        assert!(!body.error.is_empty());
    }

    #[test]
    fn test_source_error_converts() {
        let err: AppError = StoreError::upstream("offline").into();
        assert!(matches!(err, AppError::Source(_)));
    }
}
