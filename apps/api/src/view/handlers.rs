use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use super::{render_page, PageOptions};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    /// `off` hides the furigana readings.
    pub ruby: Option<String>,
}

/// GET /
pub async fn handle_index(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    let options = PageOptions {
        show_ruby: query.ruby.as_deref() != Some("off"),
        speech_available: state.speech.is_available(),
    };
    Html(render_page(&state.session.snapshot(), options))
}
