#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use nextstep_api::{config::Config, create_router, services::AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

pub async fn create_test_app() -> Router {
    create_router(create_test_state())
}

pub fn create_test_state() -> Arc<AppState> {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();

    Arc::new(AppState::new(Config::default()))
}

/// Sends a request and returns the status with the parsed JSON body
/// (`Value::Null` for empty bodies).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!(
                "non-JSON body for {} {}: {}",
                method,
                uri,
                String::from_utf8_lossy(&bytes)
            )
        })
    };

    (status, json)
}

pub async fn create_session(app: &Router, variant: &str) -> String {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/quiz/sessions",
        Some(serde_json::json!({ "user_id": "student-42", "variant": variant })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "body: {}", json);
    json["session_id"].as_str().unwrap().to_string()
}

pub async fn answer(app: &Router, session_id: &str, option_index: usize) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        &format!("/api/v1/quiz/sessions/{}/answers", session_id),
        Some(serde_json::json!({ "option_index": option_index })),
    )
    .await
}
