//! Error types for the Bookshelf server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Lookup by ID or name found nothing. Rendered as a 404 whose
    /// plain-text body is the message, matching the legacy wire format.
    #[error("{0}")]
    NotFound(String),

    /// Empty collection, rendered as a bodiless 404. Some endpoints answer
    /// an empty store this way instead of with a message body; the split is
    /// kept per endpoint for compatibility.
    #[error("no matching records")]
    Empty,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg).into_response(),
            AppError::Empty => StatusCode::NOT_FOUND.into_response(),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
