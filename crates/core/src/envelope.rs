//! Standard `{ code, success, message, error?, data? }` response envelope.
//!
//! Every API reply carries the HTTP status in `code`, a `success` flag chosen
//! by the caller, and a human-readable `message`. `error` and `data` are
//! opaque JSON values and are left out of the serialized body entirely when
//! they are not set.

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Standard response envelope for HTTP API handlers.
///
/// Built fresh for each reply, adjusted through the `with_*` chain, then
/// serialized and dropped.
///
/// # Example
///
/// ```
/// use envelope_core::ResponseEnvelope;
/// use serde_json::json;
///
/// let env = ResponseEnvelope::ok(201, "").with_data(json!({ "id": 7 }));
///
/// assert_eq!(env.message, "Created");
/// assert_eq!(
///     serde_json::to_value(&env).unwrap(),
///     json!({ "code": 201, "success": true, "message": "Created", "data": { "id": 7 } }),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// HTTP status code the reply is sent with.
    pub code: u16,
    /// Whether the caller reported the request as successful.
    pub success: bool,
    /// Human-readable description of the outcome.
    pub message: String,
    /// Error detail, omitted from the body when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    /// Payload, omitted from the body when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Default for ResponseEnvelope {
    fn default() -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            success: true,
            message: "OK".to_string(),
            error: None,
            data: None,
        }
    }
}

impl ResponseEnvelope {
    /// A fresh envelope: `200`, successful, message `"OK"`, no data or error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Successful envelope for `code`.
    ///
    /// An empty `message` is replaced by the reason phrase of `code`.
    pub fn ok(code: u16, message: &str) -> Self {
        Self::new()
            .with_success(true)
            .with_code(code)
            .with_message(resolve_message(message, code))
    }

    /// Failed envelope for `code`.
    ///
    /// An empty `message` is replaced by the reason phrase of `code`.
    pub fn fail(code: u16, message: &str) -> Self {
        Self::new()
            .with_success(false)
            .with_code(code)
            .with_message(resolve_message(message, code))
    }

    pub fn with_code(mut self, code: u16) -> Self {
        self.code = code;
        self
    }

    pub fn with_success(mut self, success: bool) -> Self {
        self.success = success;
        self
    }

    /// Overwrite the message as given. No reason-phrase substitution here.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach a payload. `Value::Null` leaves the payload unset.
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = non_null(data);
        self
    }

    /// Attach error detail. `Value::Null` leaves the error unset.
    pub fn with_error(mut self, error: Value) -> Self {
        self.error = non_null(error);
        self
    }
}

/// Standard reason phrase for `code`, or `""` when the code has none.
///
/// ```
/// use envelope_core::reason_phrase;
///
/// assert_eq!(reason_phrase(404), "Not Found");
/// assert_eq!(reason_phrase(599), "");
/// ```
pub fn reason_phrase(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("")
}

fn resolve_message(message: &str, code: u16) -> String {
    if message.is_empty() {
        reason_phrase(code).to_string()
    } else {
        message.to_string()
    }
}

fn non_null(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        other => Some(other),
    }
}
