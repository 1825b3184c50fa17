use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info};

use super::{SessionSnapshot, SessionState, Ticket};
use crate::catalog::find_topic;
use crate::errors::AppError;
use crate::generation::CourseGenerator;

/// Owns the session state and runs generation requests in the background.
pub struct SessionController {
    state: Mutex<SessionState>,
    generator: Arc<dyn CourseGenerator>,
}

impl SessionController {
    pub fn new(generator: Arc<dyn CourseGenerator>) -> Self {
        Self {
            state: Mutex::new(SessionState::default()),
            generator,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.lock().snapshot()
    }

    /// Transitions to `loading` for `topic_id` without issuing the request.
    /// `Ok(None)` means the topic is already current.
    pub fn begin_select(&self, topic_id: &str) -> Result<Option<Ticket>, AppError> {
        let topic = find_topic(topic_id)
            .ok_or_else(|| AppError::NotFound(format!("Topic {topic_id} not found")))?;
        Ok(self.state.lock().select(topic))
    }

    pub fn begin_retry(&self) -> Result<Ticket, AppError> {
        self.state
            .lock()
            .retry()
            .ok_or_else(|| {
                AppError::Conflict("Retry is only possible after a failed generation".to_string())
            })
    }

    /// Selects a topic and issues its generation request in the background.
    pub fn select_topic(self: &Arc<Self>, topic_id: &str) -> Result<SessionSnapshot, AppError> {
        match self.begin_select(topic_id)? {
            Some(ticket) => self.spawn(ticket),
            None => debug!("Topic {topic_id} already selected; ignoring"),
        }
        Ok(self.snapshot())
    }

    pub fn retry(self: &Arc<Self>) -> Result<SessionSnapshot, AppError> {
        let ticket = self.begin_retry()?;
        self.spawn(ticket);
        Ok(self.snapshot())
    }

    fn spawn(self: &Arc<Self>, ticket: Ticket) {
        let controller = Arc::clone(self);
        tokio::spawn(async move {
            controller.run(ticket).await;
        });
    }

    /// Issues the request for `ticket` and applies the outcome if the ticket
    /// is still current. Returns whether the outcome was applied.
    pub async fn run(&self, ticket: Ticket) -> bool {
        info!(
            "Generating course for {} (request #{})",
            ticket.topic.id, ticket.sequence
        );

        let result = self.generator.generate_course(ticket.topic.name).await;
        if let Err(e) = &result {
            error!("Generation for {} failed: {e}", ticket.topic.id);
        }

        let applied = self.state.lock().complete(&ticket, result);
        if applied {
            info!("Request #{} for {} completed", ticket.sequence, ticket.topic.id);
        } else {
            debug!(
                "Discarding stale result of request #{} for {}",
                ticket.sequence, ticket.topic.id
            );
        }
        applied
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::sync::oneshot;

    use super::*;
    use crate::generation::generator::testing::StubGenerator;
    use crate::generation::GenerationError;
    use crate::models::course::fixtures::sample_course;
    use crate::models::course::Course;
    use crate::session::{LoadingState, GENERATION_FAILED_MESSAGE};

    #[tokio::test]
    async fn test_late_response_for_previous_topic_is_ignored() {
        let stub = Arc::new(StubGenerator::default());
        let controller = SessionController::new(stub.clone());

        let ticket_a = controller.begin_select("docker").unwrap().unwrap();
        let ticket_b = controller.begin_select("kubernetes").unwrap().unwrap();

        assert!(controller.run(ticket_b).await);
        assert!(!controller.run(ticket_a).await);

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, LoadingState::Success);
        assert_eq!(snapshot.topic.map(|t| t.id), Some("kubernetes"));
        assert_eq!(snapshot.course.unwrap().topic, "Kubernetes");
    }

    #[tokio::test]
    async fn test_unknown_topic_is_not_found() {
        let controller = SessionController::new(Arc::new(StubGenerator::default()));
        assert!(matches!(
            controller.begin_select("mainframe"),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(controller.snapshot().state, LoadingState::Idle);
    }

    #[tokio::test]
    async fn test_reselect_issues_no_request() {
        let stub = Arc::new(StubGenerator::default());
        let controller = Arc::new(SessionController::new(stub.clone()));

        let ticket = controller.begin_select("redis").unwrap().unwrap();
        controller.run(ticket).await;
        let before = controller.snapshot();

        let after = controller.select_topic("redis").unwrap();
        tokio::task::yield_now().await;

        assert_eq!(stub.call_count(), 1);
        assert_eq!(after.sequence, before.sequence);
        assert_eq!(after.state, LoadingState::Success);
    }

    #[tokio::test]
    async fn test_retry_after_schema_violation() {
        let stub = Arc::new(StubGenerator::scripted(vec![Err(GenerationError::Malformed(
            "missing field `sections`".to_string(),
        ))]));
        let controller = Arc::new(SessionController::new(stub.clone()));

        let ticket = controller.begin_select("kafka").unwrap().unwrap();
        controller.run(ticket).await;
        let failed = controller.snapshot();
        assert_eq!(failed.state, LoadingState::Error);
        assert_eq!(failed.error.as_deref(), Some(GENERATION_FAILED_MESSAGE));
        assert!(failed.course.is_none());

        let retry = controller.begin_retry().unwrap();
        assert_eq!(retry.topic.id, "kafka");
        assert_eq!(controller.snapshot().state, LoadingState::Loading);
        controller.run(retry).await;

        let recovered = controller.snapshot();
        assert_eq!(recovered.state, LoadingState::Success);
        assert!(recovered.error.is_none());
        assert_eq!(stub.calls.lock().as_slice(), ["Kafka", "Kafka"]);
    }

    #[tokio::test]
    async fn test_retry_without_error_is_conflict() {
        let controller = SessionController::new(Arc::new(StubGenerator::default()));
        assert!(matches!(controller.begin_retry(), Err(AppError::Conflict(_))));
    }

    /// Holds the response for one topic until released.
    struct GatedGenerator {
        gate: Mutex<Option<oneshot::Receiver<()>>>,
        gated_topic: &'static str,
    }

    #[async_trait]
    impl CourseGenerator for GatedGenerator {
        async fn generate_course(&self, topic_name: &str) -> Result<Course, GenerationError> {
            if topic_name == self.gated_topic {
                let gate = self.gate.lock().take();
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
            }
            Ok(sample_course(topic_name))
        }
    }

    #[tokio::test]
    async fn test_background_requests_keep_newest_selection() {
        let (release, gate) = oneshot::channel();
        let controller = Arc::new(SessionController::new(Arc::new(GatedGenerator {
            gate: Mutex::new(Some(gate)),
            gated_topic: "AWS",
        })));

        controller.select_topic("aws").unwrap();
        controller.select_topic("azure").unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(controller.snapshot().course.unwrap().topic, "Azure");

        release.send(()).unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.state, LoadingState::Success);
        assert_eq!(snapshot.topic.map(|t| t.id), Some("azure"));
        assert_eq!(snapshot.course.unwrap().topic, "Azure");
    }
}
