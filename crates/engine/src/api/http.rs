//! HTTP routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::app::App;
use crate::infrastructure::ports::SessionError;
use crate::use_cases::{GuessOutcome, ProgressSnapshot, RoundStarted, SessionCreated};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/{id}", get(get_progress).delete(end_session))
        .route("/api/sessions/{id}/round", post(start_round))
        .route("/api/sessions/{id}/guess", post(submit_guess))
        .route("/api/sessions/{id}/reset", post(reset_session))
}

async fn health() -> &'static str {
    "OK"
}

async fn create_session(State(app): State<Arc<App>>) -> Json<SessionCreated> {
    Json(app.use_cases.create_session.execute().await)
}

async fn get_progress(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProgressSnapshot>, ApiError> {
    let snapshot = app.use_cases.progress.execute(id)?;
    Ok(Json(snapshot))
}

async fn start_round(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<RoundStarted>, ApiError> {
    let round = app.use_cases.start_round.execute(id)?;
    Ok(Json(round))
}

#[derive(Debug, serde::Deserialize)]
pub struct GuessRequest {
    pub guess: String,
}

async fn submit_guess(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
    Json(request): Json<GuessRequest>,
) -> Result<Json<GuessOutcome>, ApiError> {
    // Surrounding whitespace is input noise; the comparison itself stays exact.
    let outcome = app.use_cases.submit_guess.execute(id, request.guess.trim())?;
    Ok(Json(outcome))
}

async fn reset_session(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProgressSnapshot>, ApiError> {
    let snapshot = app.use_cases.reset_session.execute(id)?;
    Ok(Json(snapshot))
}

async fn end_session(
    State(app): State<Arc<App>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    app.use_cases.end_session.execute(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg).into_response(),
            ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<SessionError> for ApiError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::NotFound => ApiError::NotFound,
            SessionError::EmptyGuess => ApiError::BadRequest(e.to_string()),
            SessionError::NoCountryData | SessionError::Exhausted | SessionError::NoActiveRound => {
                ApiError::Conflict(e.to_string())
            }
        }
    }
}
