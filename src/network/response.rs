//! Response definitions
//!
//! JSON bodies sent to clients and the error → status code mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::FeatureError;

/// Body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Body of a successful delete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

impl FeatureError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            FeatureError::Validation(_) => StatusCode::BAD_REQUEST,
            FeatureError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for FeatureError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Server faults are logged in full but not echoed to the client
        let body = if self.is_client_error() {
            tracing::warn!("Rejected request: {}", self);
            ErrorBody::new(self.to_string())
        } else {
            tracing::error!("Request failed: {}", self);
            ErrorBody::new("Internal server error")
        };

        (status, Json(body)).into_response()
    }
}
