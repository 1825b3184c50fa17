//! Axum route handlers for the session API.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::session::SessionSnapshot;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectTopicRequest {
    pub topic_id: String,
}

/// GET /api/v1/session
pub async fn handle_get_session(State(state): State<AppState>) -> Json<SessionSnapshot> {
    Json(state.session.snapshot())
}

/// POST /api/v1/session/select
///
/// Switches to a topic and starts generating its course in the background.
/// Re-selecting the current topic returns the unchanged snapshot.
pub async fn handle_select_topic(
    State(state): State<AppState>,
    Json(request): Json<SelectTopicRequest>,
) -> Result<(StatusCode, Json<SessionSnapshot>), AppError> {
    let topic_id = request.topic_id.trim();
    if topic_id.is_empty() {
        return Err(AppError::Validation("topic_id cannot be empty".to_string()));
    }
    let snapshot = state.session.select_topic(topic_id)?;
    Ok((StatusCode::ACCEPTED, Json(snapshot)))
}

/// POST /api/v1/session/retry
pub async fn handle_retry(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionSnapshot>), AppError> {
    let snapshot = state.session.retry()?;
    Ok((StatusCode::ACCEPTED, Json(snapshot)))
}
