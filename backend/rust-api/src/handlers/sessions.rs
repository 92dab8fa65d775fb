use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use validator::Validate;

use crate::{
    extractors::AppJson,
    handlers::error::ApiError,
    models::{CreateSessionRequest, SubmitAnswerRequest},
    services::AppState,
};

pub async fn create_session(
    State(state): State<Arc<AppState>>,
    AppJson(req): AppJson<CreateSessionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    req.validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    tracing::info!(
        "Creating quiz session for user_id={:?}, variant={}",
        req.user_id,
        req.variant.as_str()
    );

    let response = state.session_service().create_session(req).await;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("Getting quiz session: {}", session_id);

    let session = state.session_service().get_session(&session_id).await?;
    Ok(Json(session))
}

pub async fn delete_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    state.session_service().delete_session(&session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn submit_answer(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    AppJson(req): AppJson<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!(
        "Submitting answer for session {}: option_index={}",
        session_id,
        req.option_index
    );

    let session = state
        .session_service()
        .submit_answer(&session_id, req.option_index)
        .await?;
    Ok(Json(session))
}

pub async fn reset_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let session = state.session_service().reset_session(&session_id).await?;
    Ok(Json(session))
}

pub async fn get_result(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let view = state.session_service().get_result(&session_id).await?;
    Ok(Json(view))
}
