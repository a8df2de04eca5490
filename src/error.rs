//! Error types for FeatureBoard
//!
//! Provides a unified error type for all operations, plus the closed set of
//! client-input validation failures.

use thiserror::Error;

/// Result type alias using FeatureError
pub type Result<T> = std::result::Result<T, FeatureError>;

/// Unified error type for FeatureBoard operations
#[derive(Debug, Error)]
pub enum FeatureError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Client Input Errors
    // -------------------------------------------------------------------------
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Feature not found")]
    NotFound { id: String },

    // -------------------------------------------------------------------------
    // Network Errors
    // -------------------------------------------------------------------------
    #[error("Network error: {0}")]
    Network(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Runtime Errors
    // -------------------------------------------------------------------------
    #[error("Internal error: {0}")]
    Internal(String),
}

impl FeatureError {
    /// True for errors caused by the request rather than by the server
    pub fn is_client_error(&self) -> bool {
        matches!(self, FeatureError::Validation(_) | FeatureError::NotFound { .. })
    }
}

/// Rejected request input
///
/// The `Display` text of each variant is the message returned to clients.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,

    #[error("No data provided")]
    NoData,

    #[error("Title cannot be empty")]
    EmptyTitle,

    #[error("Invalid status")]
    InvalidStatus,
}
