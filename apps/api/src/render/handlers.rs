use axum::Json;
use serde::{Deserialize, Serialize};

use super::{render, Block, RenderMode};

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub text: String,
    /// Treat prose as trusted inline HTML (ruby-annotated Japanese).
    #[serde(default)]
    pub html: bool,
}

#[derive(Debug, Serialize)]
pub struct RenderResponse {
    pub blocks: Vec<Block>,
}

/// POST /api/v1/render
pub async fn handle_render(Json(request): Json<RenderRequest>) -> Json<RenderResponse> {
    let mode = if request.html {
        RenderMode::TrustedHtml
    } else {
        RenderMode::PlainText
    };
    Json(RenderResponse {
        blocks: render(&request.text, mode),
    })
}
