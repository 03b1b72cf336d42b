//! Error types for the library service
//!
//! Provides unified error handling using thiserror. The cache itself has no
//! fallible operations; these errors come from the record store and request
//! validation.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Library Error Enum ==
/// Unified error type for the library service.
#[derive(Error, Debug)]
pub enum LibraryError {
    /// Record not found in the store
    #[error("{0} not found")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for LibraryError {
    fn into_response(self) -> Response {
        let status = match &self {
            LibraryError::NotFound(_) => StatusCode::NOT_FOUND,
            LibraryError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            LibraryError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the library service.
pub type Result<T> = std::result::Result<T, LibraryError>;
