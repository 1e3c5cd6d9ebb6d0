use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use poetry_core::error::CoreError;
use poetry_db::StoreError;

use crate::response::ApiResponse;

/// Message sent to clients in place of internal failure details.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and [`StoreError`] and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the standard failure envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `poetry_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the poem store.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    /// HTTP status and client-facing message for this error.
    ///
    /// Database failures are logged here and replaced by a generic message.
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            },

            AppError::Store(store) => match store {
                StoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                StoreError::Database { operation, source } => {
                    tracing::error!(
                        operation,
                        error = %source,
                        pool_timeout = store.is_pool_timeout(),
                        "Database error"
                    );
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
                }
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        (status, Json(ApiResponse::failure(message))).into_response()
    }
}
