#![allow(dead_code)]

use std::time::Duration;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use envelope_api::config::ServerConfig;
use envelope_api::router::build_app_router;

/// Build a test `ServerConfig` bound to an ephemeral port.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        addr: "127.0.0.1:0".parse().unwrap(),
        request_timeout: Duration::from_secs(30),
    }
}

/// Build the application router exactly as `main.rs` does.
pub fn build_test_app() -> Router {
    build_app_router(&test_config())
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri).await
}

/// Send a bodiless request with the given method through the router.
pub async fn send(app: Router, method: Method, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Render anything axum can respond with into its status and JSON body.
pub async fn render(reply: impl IntoResponse) -> (StatusCode, serde_json::Value) {
    let response = reply.into_response();
    let status = response.status();
    (status, body_json(response).await)
}
