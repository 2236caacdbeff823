//! Router for the demo server.
//!
//! Every reply leaving this router is an envelope, including the ones axum
//! and tower-http produce on their own: unknown paths (404), unsupported
//! methods (405), timeouts (408) and handler panics (500).

use std::any::Any;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::Router;
use envelope_core::ResponseEnvelope;
use serde_json::Value;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::reply::{self, ApiResponse};
use crate::routes;

/// The demo routes with the full middleware stack.
pub fn build_app_router(config: &ServerConfig) -> Router {
    with_middleware(routes::health::router(), config)
}

/// Wrap `routes` in the envelope fallbacks and middleware.
///
/// Layers, innermost first: panic recovery, timeout, timeout envelope,
/// request-id propagation, tracing, request-id assignment.
pub fn with_middleware(routes: Router, config: &ServerConfig) -> Router {
    let request_id = HeaderName::from_static("x-request-id");

    routes
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(routes::fallback)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(middleware::map_response(envelope_timeout))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
}

async fn method_not_allowed() -> ApiResponse {
    ResponseEnvelope::fail(StatusCode::METHOD_NOT_ALLOWED.as_u16(), "").into()
}

/// `TimeoutLayer` answers with an empty 408; give it a body.
async fn envelope_timeout(response: Response) -> Response {
    if response.status() != StatusCode::REQUEST_TIMEOUT
        || response.headers().contains_key(CONTENT_TYPE)
    {
        return response;
    }
    ApiResponse::from(ResponseEnvelope::fail(StatusCode::REQUEST_TIMEOUT.as_u16(), ""))
        .into_response()
}

/// Panic payloads are logged, never sent.
fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    tracing::error!(panic = %detail, "Handler panicked");

    reply::internal_server_error("", Value::Null, Value::Null).into_response()
}
