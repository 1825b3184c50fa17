//! Axum route handlers for read-aloud.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    pub text: String,
    pub lang: String,
}

#[derive(Debug, Serialize)]
pub struct SpeechStatus {
    pub available: bool,
    pub speaking: bool,
}

/// GET /api/v1/speech
pub async fn handle_status(State(state): State<AppState>) -> Json<SpeechStatus> {
    Json(SpeechStatus {
        available: state.speech.is_available(),
        speaking: state.speech.is_speaking(),
    })
}

/// POST /api/v1/speech
///
/// Fire-and-forget: always 204, even without a speech engine.
pub async fn handle_speak(
    State(state): State<AppState>,
    Json(request): Json<SpeakRequest>,
) -> StatusCode {
    state.speech.speak(&request.text, &request.lang);
    StatusCode::NO_CONTENT
}

/// POST /api/v1/speech/stop
pub async fn handle_stop(State(state): State<AppState>) -> StatusCode {
    state.speech.stop();
    StatusCode::NO_CONTENT
}
