use axum::Json;

use crate::catalog::CATEGORIES;
use crate::models::topic::CategoryDef;

/// GET /api/v1/topics
pub async fn handle_list_topics() -> Json<&'static [CategoryDef]> {
    Json(CATEGORIES)
}
