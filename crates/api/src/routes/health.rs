use axum::{routing::get, Router};
use serde_json::json;

use crate::reply::{self, ApiResponse};

/// GET /health -- reports the service as up along with the crate version.
async fn health_check() -> ApiResponse {
    reply::success(
        "ok",
        json!({
            "version": env!("CARGO_PKG_VERSION"),
        }),
    )
}

/// Mount health check routes at the root level.
pub fn router() -> Router {
    Router::new().route("/health", get(health_check))
}
