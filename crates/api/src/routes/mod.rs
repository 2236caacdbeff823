pub mod health;

use serde_json::Value;

use crate::reply::{self, ApiResponse};

/// Router fallback: unknown paths get a 404 envelope.
pub async fn fallback() -> ApiResponse {
    reply::not_found("", Value::Null)
}
