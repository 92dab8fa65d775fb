use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use base64::{engine::general_purpose, Engine as _};
use http_body_util::BodyExt;
use serial_test::serial;
use std::time::Duration;
use tower::ServiceExt;

mod common;

#[tokio::test]
async fn test_list_questions_defaults_to_extended() {
    let app = common::create_test_app().await;

    let (status, json) = common::send(&app, "GET", "/api/v1/quiz/questions", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["variant"], "extended");
    assert_eq!(json["options_per_question"], 6);
    let questions = json["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 10);
    assert_eq!(questions[0]["number"], 1);
}

#[tokio::test]
async fn test_list_compact_questions() {
    let app = common::create_test_app().await;

    let (status, json) =
        common::send(&app, "GET", "/api/v1/quiz/questions?variant=compact", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["options_per_question"], 4);
    for question in json["questions"].as_array().unwrap() {
        assert_eq!(question["options"].as_array().unwrap().len(), 4);
    }
}

#[tokio::test]
async fn test_unknown_variant_is_bad_request() {
    let app = common::create_test_app().await;

    let (status, json) =
        common::send(&app, "GET", "/api/v1/quiz/questions?variant=huge", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_list_careers_in_declaration_order() {
    let app = common::create_test_app().await;

    let (status, json) = common::send(&app, "GET", "/api/v1/quiz/careers", None).await;

    assert_eq!(status, StatusCode::OK);
    let labels: Vec<&str> = json["careers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|career| career["label"].as_str().unwrap())
        .collect();
    assert_eq!(
        labels,
        vec![
            "Software Engineer",
            "Cybersecurity Specialist",
            "Data Scientist",
            "Cloud Engineer",
            "AI/ML Engineer",
            "Mobile Developer",
        ]
    );
}

#[tokio::test]
async fn test_health_reports_active_sessions() {
    let app = common::create_test_app().await;
    common::create_session(&app, "compact").await;

    let (status, json) = common::send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["active_sessions"], 1);
}

#[tokio::test]
async fn test_responses_carry_trace_id() {
    let app = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-trace-id", "trace-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()["x-trace-id"], "trace-123");

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-trace-id"));
}

#[tokio::test]
#[serial]
async fn test_metrics_requires_basic_auth() {
    std::env::set_var("METRICS_AUTH", "ops:secret");
    let app = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let credentials = general_purpose::STANDARD.encode("ops:secret");
    let response = app
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .header("authorization", format!("Basic {}", credentials))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&body).contains("http_requests_total"));

    std::env::remove_var("METRICS_AUTH");
}

#[tokio::test]
async fn test_completed_quiz_is_pushed_to_event_stream() {
    let app = common::create_test_app().await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/v1/quiz/events")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let mut body = response.into_body();

    let session_id = common::create_session(&app, "compact").await;
    for option in [1, 1, 1, 0, 2] {
        common::answer(&app, &session_id, option).await;
    }

    let frame = tokio::time::timeout(Duration::from_secs(5), body.frame())
        .await
        .expect("timed out waiting for event")
        .unwrap()
        .unwrap();
    let data = frame.into_data().unwrap();
    let text = String::from_utf8_lossy(&data);

    assert!(text.contains("event: career-recommended"));
    assert!(text.contains("Cybersecurity Specialist"));
    assert!(text.contains(&session_id));
}

#[tokio::test]
async fn test_unknown_session_ids_share_one_metrics_series() {
    let app = common::create_test_app().await;

    for i in 0..5 {
        let (status, _) = common::send(
            &app,
            "GET",
            &format!("/api/v1/quiz/sessions/bogus-{}", i),
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    let text = nextstep_api::metrics::render_metrics().unwrap();
    assert!(!text.contains("bogus-"));
    assert!(text.contains(r#"path="/api/v1/quiz/sessions/{id}""#));
}
