use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

mod common;

#[tokio::test]
async fn test_create_session_returns_first_question() {
    let app = common::create_test_app().await;

    let (status, json) = common::send(
        &app,
        "POST",
        "/api/v1/quiz/sessions",
        Some(json!({ "user_id": "student-1" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["variant"], "extended");
    assert_eq!(json["status"], "in_progress");
    assert_eq!(json["answered"], 0);
    assert_eq!(json["total_questions"], 10);
    assert_eq!(json["current_question"]["number"], 1);
    assert_eq!(json["current_question"]["options"].as_array().unwrap().len(), 6);
    assert!(json["recommendation"].is_null());
}

#[tokio::test]
async fn test_create_session_rejects_empty_user_id() {
    let app = common::create_test_app().await;

    let (status, json) = common::send(
        &app,
        "POST",
        "/api/v1/quiz/sessions",
        Some(json!({ "user_id": "" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_complete_compact_quiz() {
    let app = common::create_test_app().await;
    let session_id = common::create_session(&app, "compact").await;

    for (position, option) in [0, 0, 0, 1].into_iter().enumerate() {
        let (status, json) = common::answer(&app, &session_id, option).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["status"], "in_progress");
        assert_eq!(json["answered"], position + 1);
        assert_eq!(json["current_question"]["number"], position + 2);
    }

    let (status, json) = common::answer(&app, &session_id, 0).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "completed");
    assert!(json["current_question"].is_null());
    assert_eq!(json["answers"], json!([0, 0, 0, 1, 0]));
    assert_eq!(json["recommendation"]["category"], "Software Engineer");
    assert_eq!(json["recommendation"]["confidence_percent"], 80);

    let (status, result) = common::send(
        &app,
        "GET",
        &format!("/api/v1/quiz/sessions/{}/result", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["category"], "Software Engineer");
    assert_eq!(result["confidence_percent"], 80);
    assert_eq!(result["icon"], "code");
    assert_eq!(result["section_index"], 0);
}

#[tokio::test]
async fn test_even_split_uses_first_declared_category() {
    let app = common::create_test_app().await;
    let session_id = common::create_session(&app, "extended").await;

    let answers = [5, 4, 3, 2, 1, 0, 5, 4, 3, 2];
    let mut last = json!(null);
    for option in answers {
        let (status, json) = common::answer(&app, &session_id, option).await;
        assert_eq!(status, StatusCode::OK);
        last = json;
    }

    // Four categories share the top count of two; the earliest declared wins
    assert_eq!(last["recommendation"]["category"], "Data Scientist");
    assert_eq!(last["recommendation"]["confidence_percent"], 20);
}

#[tokio::test]
async fn test_out_of_range_option_is_bad_request() {
    let app = common::create_test_app().await;
    let session_id = common::create_session(&app, "compact").await;

    let (status, json) = common::answer(&app, &session_id, 4).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].as_str().unwrap().contains("out of range"));

    let (_, session) = common::send(
        &app,
        "GET",
        &format!("/api/v1/quiz/sessions/{}", session_id),
        None,
    )
    .await;
    assert_eq!(session["answered"], 0);
}

#[tokio::test]
async fn test_answer_after_completion_is_conflict() {
    let app = common::create_test_app().await;
    let session_id = common::create_session(&app, "compact").await;

    for _ in 0..5 {
        common::answer(&app, &session_id, 2).await;
    }

    let (status, _) = common::answer(&app, &session_id, 2).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_result_before_completion_is_conflict() {
    let app = common::create_test_app().await;
    let session_id = common::create_session(&app, "compact").await;
    common::answer(&app, &session_id, 1).await;

    let (status, _) = common::send(
        &app,
        "GET",
        &format!("/api/v1/quiz/sessions/{}/result", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_reset_and_replay_gives_same_result() {
    let app = common::create_test_app().await;
    let session_id = common::create_session(&app, "compact").await;
    let answers = [3, 3, 1, 0, 3];

    let mut first = json!(null);
    for option in answers {
        first = common::answer(&app, &session_id, option).await.1;
    }

    let (status, reset) = common::send(
        &app,
        "POST",
        &format!("/api/v1/quiz/sessions/{}/reset", session_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(reset["status"], "in_progress");
    assert_eq!(reset["answered"], 0);
    assert_eq!(reset["current_question"]["number"], 1);

    let mut second = json!(null);
    for option in answers {
        second = common::answer(&app, &session_id, option).await.1;
    }

    assert_eq!(first["recommendation"], second["recommendation"]);
    assert_eq!(second["recommendation"]["category"], "Cloud Engineer");
    assert_eq!(second["recommendation"]["confidence_percent"], 60);
}

#[tokio::test]
async fn test_unknown_session_returns_404() {
    let app = common::create_test_app().await;

    let (status, _) = common::send(
        &app,
        "GET",
        &format!("/api/v1/quiz/sessions/{}", Uuid::new_v4()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = common::answer(&app, "not-a-session", 0).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_session() {
    let app = common::create_test_app().await;
    let session_id = common::create_session(&app, "extended").await;
    let uri = format!("/api/v1/quiz/sessions/{}", session_id);

    let (status, _) = common::send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = common::send(&app, "GET", &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_body_returns_json_error() {
    let app = common::create_test_app().await;
    let session_id = common::create_session(&app, "compact").await;

    let (status, json) = common::send(
        &app,
        "POST",
        &format!("/api/v1/quiz/sessions/{}/answers", session_id),
        Some(json!({ "option_index": "first" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"]
        .as_str()
        .unwrap()
        .starts_with("Failed to parse JSON request body"));
}
