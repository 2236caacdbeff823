use axum::response::{IntoResponse, Response};
use envelope_core::CoreError;
use serde_json::{json, Value};

use crate::reply;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] by rendering through the status helpers, so
/// error replies use the same envelope as successful ones.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `envelope_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_MESSAGE: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let response = match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => {
                    reply::not_found(&format!("{entity} with id {id} not found"), Value::Null)
                }
                CoreError::Validation(msg) => {
                    reply::unprocessable_entity("Validation failed", json!(msg), Value::Null)
                }
                CoreError::Conflict(msg) => reply::conflict(&msg, Value::Null),
                CoreError::Unauthorized(msg) => reply::unauthorized(&msg, Value::Null),
                CoreError::Forbidden(msg) => reply::forbidden(&msg, Value::Null),
                CoreError::Unavailable(msg) => {
                    reply::service_unavailable(&msg, Value::Null, Value::Null)
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    reply::internal_server_error(INTERNAL_MESSAGE, Value::Null, Value::Null)
                }
            },

            AppError::BadRequest(msg) => reply::bad_request(&msg, Value::Null, Value::Null),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                reply::internal_server_error(INTERNAL_MESSAGE, Value::Null, Value::Null)
            }
        };

        response.into_response()
    }
}
