//! Status helpers that wrap handler outcomes in the response envelope.
//!
//! Each helper pins one HTTP status and one polarity (success or failure),
//! builds a [`ResponseEnvelope`] with it, and returns an [`ApiResponse`] that
//! axum writes as the JSON body with that same status.
//!
//! `data` and `error` are opaque JSON values; pass [`Value::Null`] to leave
//! them out of the body.
//!
//! ```ignore
//! async fn get_project(Path(id): Path<i64>) -> ApiResponse {
//!     reply::success("", json!({ "id": id }))
//! }
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use envelope_core::{reason_phrase, ResponseEnvelope};
use serde_json::Value;

/// A [`ResponseEnvelope`] ready to be returned from an axum handler.
///
/// The status line is always taken from the envelope's `code`, so the two
/// cannot disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse(pub ResponseEnvelope);

impl ApiResponse {
    pub fn envelope(&self) -> &ResponseEnvelope {
        &self.0
    }

    pub fn into_envelope(self) -> ResponseEnvelope {
        self.0
    }
}

impl From<ResponseEnvelope> for ApiResponse {
    fn from(envelope: ResponseEnvelope) -> Self {
        Self(envelope)
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        let mut envelope = self.0;

        // Codes outside the HTTP range cannot go on the status line; send a
        // 500 envelope instead so body and status still match.
        let status = match StatusCode::from_u16(envelope.code) {
            Ok(status) => status,
            Err(_) => {
                tracing::error!(code = envelope.code, "Envelope carries an invalid HTTP status code");
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                envelope = envelope
                    .with_code(status.as_u16())
                    .with_success(false)
                    .with_message(reason_phrase(status.as_u16()));
                status
            }
        };

        if status.is_server_error() {
            tracing::error!(code = envelope.code, message = %envelope.message, "Server error response");
        } else if !envelope.success {
            tracing::debug!(code = envelope.code, message = %envelope.message, "Error response");
        }

        (status, Json(envelope)).into_response()
    }
}

fn ok(status: StatusCode, message: &str) -> ResponseEnvelope {
    ResponseEnvelope::ok(status.as_u16(), message)
}

fn fail(status: StatusCode, message: &str) -> ResponseEnvelope {
    ResponseEnvelope::fail(status.as_u16(), message)
}

// --- Success family ---

/// 200 OK.
pub fn success(message: &str, data: Value) -> ApiResponse {
    ok(StatusCode::OK, message).with_data(data).into()
}

/// 201 Created.
pub fn created(message: &str, data: Value) -> ApiResponse {
    ok(StatusCode::CREATED, message).with_data(data).into()
}

/// 204 No Content. The envelope is still produced; whether the body reaches
/// the client is up to the HTTP server.
pub fn no_content(message: &str) -> ApiResponse {
    ok(StatusCode::NO_CONTENT, message).into()
}

// --- Error family ---

/// 400 Bad Request.
///
/// Sends 400 in both the status line and `code`, not 502 (Bad Gateway), so
/// the status matches the helper's name.
pub fn bad_request(message: &str, error: Value, data: Value) -> ApiResponse {
    fail(StatusCode::BAD_REQUEST, message)
        .with_error(error)
        .with_data(data)
        .into()
}

/// 401 Unauthorized.
pub fn unauthorized(message: &str, data: Value) -> ApiResponse {
    fail(StatusCode::UNAUTHORIZED, message).with_data(data).into()
}

/// 403 Forbidden.
pub fn forbidden(message: &str, data: Value) -> ApiResponse {
    fail(StatusCode::FORBIDDEN, message).with_data(data).into()
}

/// 404 Not Found.
pub fn not_found(message: &str, data: Value) -> ApiResponse {
    fail(StatusCode::NOT_FOUND, message).with_data(data).into()
}

/// 409 Conflict.
pub fn conflict(message: &str, data: Value) -> ApiResponse {
    fail(StatusCode::CONFLICT, message).with_data(data).into()
}

/// 422 Unprocessable Entity.
pub fn unprocessable_entity(message: &str, error: Value, data: Value) -> ApiResponse {
    fail(StatusCode::UNPROCESSABLE_ENTITY, message)
        .with_error(error)
        .with_data(data)
        .into()
}

/// 503 Service Unavailable.
pub fn service_unavailable(message: &str, error: Value, data: Value) -> ApiResponse {
    fail(StatusCode::SERVICE_UNAVAILABLE, message)
        .with_error(error)
        .with_data(data)
        .into()
}

/// 500 Internal Server Error.
pub fn internal_server_error(message: &str, error: Value, data: Value) -> ApiResponse {
    fail(StatusCode::INTERNAL_SERVER_ERROR, message)
        .with_error(error)
        .with_data(data)
        .into()
}
