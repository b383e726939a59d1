//! Error types for the lookup API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_db::DbError;

/// Errors that can occur in the lookup API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A query parameter was missing, blank or malformed.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A data layer lookup failed.
    #[error(transparent)]
    Database(#[from] DbError),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection.body_text())
    }
}

impl ApiError {
    /// HTTP status this error is reported with.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
            Self::Database(DbError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::InvalidQuery(_) | Self::Database(DbError::NotFound { .. }) => self.to_string(),
            Self::Database(e) => {
                // Database details stay in the logs.
                tracing::error!(error = %e, "Roster lookup failed");
                String::from("database error")
            }
        };

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
