pub mod health;
pub mod topics;

use axum::{
    routing::{get, post},
    Router,
};

use crate::render::handlers as render_handlers;
use crate::session::handlers as session_handlers;
use crate::speech::handlers as speech_handlers;
use crate::state::AppState;
use crate::view::handlers as view_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(view_handlers::handle_index))
        .route("/health", get(health::health_handler))
        .route("/api/v1/topics", get(topics::handle_list_topics))
        // Session lifecycle
        .route("/api/v1/session", get(session_handlers::handle_get_session))
        .route(
            "/api/v1/session/select",
            post(session_handlers::handle_select_topic),
        )
        .route("/api/v1/session/retry", post(session_handlers::handle_retry))
        // Content helpers
        .route("/api/v1/render", post(render_handlers::handle_render))
        .route(
            "/api/v1/speech",
            get(speech_handlers::handle_status).post(speech_handlers::handle_speak),
        )
        .route("/api/v1/speech/stop", post(speech_handlers::handle_stop))
        .with_state(state)
}
