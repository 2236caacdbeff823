//! Tests for the status helpers: each one must send its pinned status code,
//! the matching `code` in the body, and the right `success` polarity.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::render;
use envelope_api::reply::{self, ApiResponse};
use envelope_core::ResponseEnvelope;
use http_body_util::BodyExt;
use serde_json::{json, Value};

/// Helper: render a reply and return the status plus the raw body text.
async fn render_text(reply: ApiResponse) -> (StatusCode, String) {
    let response = reply.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

// ---------------------------------------------------------------------------
// Exact wire bodies
// ---------------------------------------------------------------------------

#[tokio::test]
async fn success_writes_200_with_data() {
    let (status, body) = render_text(reply::success("done", json!({ "id": 1 }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"code":200,"success":true,"message":"done","data":{"id":1}}"#
    );
}

#[tokio::test]
async fn not_found_with_empty_message_uses_reason_phrase() {
    let (status, body) = render_text(reply::not_found("", Value::Null)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, r#"{"code":404,"success":false,"message":"Not Found"}"#);
}

#[tokio::test]
async fn no_content_writes_204_envelope() {
    let (status, body) = render_text(reply::no_content("done")).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, r#"{"code":204,"success":true,"message":"done"}"#);
}

#[tokio::test]
async fn internal_server_error_carries_error_detail() {
    let (status, json) =
        render(reply::internal_server_error("boom", json!("stacktrace..."), Value::Null)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], 500);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "boom");
    assert_eq!(json["error"], "stacktrace...");
    assert!(json.get("data").is_none());
}

// ---------------------------------------------------------------------------
// Status and polarity of every helper
// ---------------------------------------------------------------------------

#[tokio::test]
async fn every_helper_sends_its_own_code_in_status_and_body() {
    let cases: Vec<(ApiResponse, StatusCode, bool)> = vec![
        (reply::success("", Value::Null), StatusCode::OK, true),
        (reply::created("", Value::Null), StatusCode::CREATED, true),
        (reply::no_content(""), StatusCode::NO_CONTENT, true),
        (
            reply::bad_request("", Value::Null, Value::Null),
            StatusCode::BAD_REQUEST,
            false,
        ),
        (reply::unauthorized("", Value::Null), StatusCode::UNAUTHORIZED, false),
        (reply::forbidden("", Value::Null), StatusCode::FORBIDDEN, false),
        (reply::not_found("", Value::Null), StatusCode::NOT_FOUND, false),
        (reply::conflict("", Value::Null), StatusCode::CONFLICT, false),
        (
            reply::unprocessable_entity("", Value::Null, Value::Null),
            StatusCode::UNPROCESSABLE_ENTITY,
            false,
        ),
        (
            reply::service_unavailable("", Value::Null, Value::Null),
            StatusCode::SERVICE_UNAVAILABLE,
            false,
        ),
        (
            reply::internal_server_error("", Value::Null, Value::Null),
            StatusCode::INTERNAL_SERVER_ERROR,
            false,
        ),
    ];

    for (reply, expected_status, expected_success) in cases {
        let (status, json) = render(reply).await;

        assert_eq!(status, expected_status);
        assert_eq!(json["code"], expected_status.as_u16());
        assert_eq!(json["success"], expected_success, "polarity for {status}");
        assert_eq!(
            json["message"],
            expected_status.canonical_reason().unwrap(),
            "default message for {status}"
        );
        assert!(json.get("error").is_none());
        assert!(json.get("data").is_none());
    }
}

#[tokio::test]
async fn bad_request_sends_400_not_502() {
    let reply = reply::bad_request("missing name", json!({ "field": "name" }), Value::Null);
    assert_eq!(reply.envelope().code, 400);

    let (status, json) = render(reply).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "missing name");
    assert_eq!(json["error"], json!({ "field": "name" }));
}

#[tokio::test]
async fn unprocessable_entity_carries_error_and_data() {
    let (status, json) = render(reply::unprocessable_entity(
        "invalid payload",
        json!({ "email": "must contain @" }),
        json!({ "received": "bob" }),
    ))
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["email"], "must contain @");
    assert_eq!(json["data"]["received"], "bob");
}

#[tokio::test]
async fn created_attaches_payload() {
    let reply = reply::created("project created", json!({ "id": 9, "name": "alpha" }));
    let envelope = reply.into_envelope();

    assert_eq!(envelope.code, 201);
    assert!(envelope.success);
    assert_eq!(envelope.data, Some(json!({ "id": 9, "name": "alpha" })));
}

// ---------------------------------------------------------------------------
// Hand-built envelopes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn custom_envelope_status_follows_code() {
    let reply = ApiResponse::from(ResponseEnvelope::ok(202, "accepted"));
    let (status, json) = render(reply).await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(json["code"], 202);
    assert_eq!(json["message"], "accepted");
}

#[tokio::test]
async fn invalid_code_is_sent_as_500_envelope() {
    let reply = ApiResponse::from(ResponseEnvelope::ok(42, "weird").with_data(json!(1)));
    let (status, json) = render(reply).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], 500);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Internal Server Error");
    assert_eq!(json["data"], 1);
}

#[tokio::test]
async fn response_is_json() {
    let response = reply::success("", Value::Null).into_response();
    let content_type = response
        .headers()
        .get("content-type")
        .expect("Missing content-type header")
        .to_str()
        .unwrap();

    assert_eq!(content_type, "application/json");
}
