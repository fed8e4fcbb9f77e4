use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::{
    error::ApiError,
    models::{StartQuizRequest, SubmitAnswerRequest},
    services::{quiz_service::QuizService, AppState},
};

/// Maps a malformed or missing JSON body to the Validation envelope instead
/// of axum's plain-text rejection.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| ApiError::Validation(rejection.body_text()))
}

pub async fn start_quiz(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<StartQuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let req = json_body(payload)?;
    tracing::info!(
        "Starting quiz for player '{}'",
        req.player_name.as_deref().unwrap_or("Anonymous")
    );

    let service = QuizService::new(state.bank.clone(), state.sessions.clone());
    let response = service.start_quiz(&req).await?;
    Ok(Json(response))
}

pub async fn get_question(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::debug!("Fetching current question for session {}", session_id);

    let service = QuizService::new(state.bank.clone(), state.sessions.clone());
    let response = service.current_question(&session_id).await?;
    Ok(Json(response))
}

pub async fn submit_answer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SubmitAnswerRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let req = json_body(payload)?;
    tracing::info!(
        "Answer submitted for session {}: option {}",
        req.session_id,
        req.selected_option
    );

    let service = QuizService::new(state.bank.clone(), state.sessions.clone());
    let response = service.submit_answer(&req).await?;
    Ok(Json(response))
}

pub async fn get_stats(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::debug!("Fetching stats for session {}", session_id);

    let service = QuizService::new(state.bank.clone(), state.sessions.clone());
    let response = service.stats(&session_id).await?;
    Ok(Json(response))
}
