//! Persistence layer error types

use thiserror::Error;

/// Errors that can occur in the template store
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Template not found
    #[error("Template not found: '{id}'")]
    NotFound { id: String },

    /// Filesystem error while reading or writing the store file
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PersistenceError {
    /// Convert to HTTP status code for API responses
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Json(_) => StatusCode::BAD_REQUEST,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
