use std::sync::Arc;

use crate::session::SessionController;
use crate::speech::ReadAloud;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one study session; owns the current course.
    pub session: Arc<SessionController>,
    /// Process-wide speech slot. At most one utterance plays at a time.
    pub speech: Arc<ReadAloud>,
}
