//! Course generation — turns a topic name into a validated `Course`.
//!
//! Flow: build instruction → one structured model call → parse → validate.
//! No retry, no caching. A failure never yields a partial course.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::{error, info};

use crate::generation::prompts::{
    COURSE_PROMPT_TEMPLATE, COURSE_SYSTEM_TEMPLATE, COURSE_TEMPERATURE,
};
use crate::generation::schema::{course_schema, SCHEMA_VERSION};
use crate::llm_client::prompts::{JSON_ONLY_INSTRUCTION, LANGUAGE_RULES};
use crate::llm_client::{LlmClient, LlmError, StructuredRequest};
use crate::models::course::Course;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("empty response from model")]
    EmptyPayload,

    #[error("response failed validation: {0}")]
    Invalid(String),
}

impl From<LlmError> for GenerationError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Http(e) => GenerationError::Transport(e.to_string()),
            LlmError::Api { status, message } => GenerationError::Service { status, message },
            LlmError::Parse(e) => GenerationError::Malformed(e.to_string()),
            LlmError::EmptyContent => GenerationError::EmptyPayload,
        }
    }
}

/// The generation seam. Treats the model as an opaque
/// `(topic name) -> Course | GenerationError` function so tests can swap in
/// a deterministic stub.
///
/// Carried in `AppState` as `Arc<dyn CourseGenerator>`.
#[async_trait]
pub trait CourseGenerator: Send + Sync {
    async fn generate_course(&self, topic_name: &str) -> Result<Course, GenerationError>;
}

/// Gemini-backed generator with a fixed response schema.
pub struct GeminiCourseGenerator {
    llm: LlmClient,
    schema: Value,
}

impl GeminiCourseGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            schema: course_schema(),
        }
    }
}

#[async_trait]
impl CourseGenerator for GeminiCourseGenerator {
    async fn generate_course(&self, topic_name: &str) -> Result<Course, GenerationError> {
        let system = build_system_instruction(topic_name);
        let prompt = build_prompt(topic_name);

        info!(
            "Requesting course for '{}' (schema v{})",
            topic_name, SCHEMA_VERSION
        );

        let course: Course = self
            .llm
            .call_json(StructuredRequest {
                system: &system,
                prompt: &prompt,
                schema: &self.schema,
                temperature: COURSE_TEMPERATURE,
            })
            .await
            .map_err(|e| {
                error!("Course generation for '{}' failed: {e}", topic_name);
                GenerationError::from(e)
            })?;

        accept_course(course)
    }
}

/// Validation step applied to every decoded response.
pub fn accept_course(course: Course) -> Result<Course, GenerationError> {
    course.validate().map_err(GenerationError::Invalid)?;
    info!(
        "Course '{}' accepted with {} sections",
        course.topic,
        course.sections.len()
    );
    Ok(course)
}

fn build_system_instruction(topic_name: &str) -> String {
    COURSE_SYSTEM_TEMPLATE
        .replace("{json_instruction}", JSON_ONLY_INSTRUCTION)
        .replace("{language_rules}", LANGUAGE_RULES)
        .replace("{topic}", topic_name)
}

fn build_prompt(topic_name: &str) -> String {
    COURSE_PROMPT_TEMPLATE.replace("{topic}", topic_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::parse_json_payload;
    use crate::models::course::fixtures::sample_course;

    fn decode(payload: &str) -> Result<Course, GenerationError> {
        let course: Course = parse_json_payload(payload)?;
        accept_course(course)
    }

    #[test]
    fn test_system_instruction_interpolates_topic_and_rules() {
        let system = build_system_instruction("Kafka");
        assert!(system.contains("the technology \"Kafka\""));
        assert!(system.contains("Best Practices & Pitfalls"));
        assert!(system.contains("<ruby>漢字<rt>かんじ</rt></ruby>"));
        assert!(system.contains(JSON_ONLY_INSTRUCTION));
        assert!(!system.contains("{topic}"));
    }

    #[test]
    fn test_prompt_names_topic() {
        assert_eq!(build_prompt("ELK Stack"), "Create a complete guide for ELK Stack.");
    }

    #[test]
    fn test_valid_payload_is_accepted() {
        let payload = serde_json::to_string(&sample_course("Docker")).unwrap();
        let course = decode(&payload).unwrap();
        assert_eq!(course.topic, "Docker");
        assert_eq!(course.sections.len(), 1);
    }

    #[test]
    fn test_missing_sections_is_malformed() {
        let payload = r#"{"topic": "Redis", "overview": {"en": "a", "zh": "b", "ja": "c"}}"#;
        assert!(matches!(decode(payload), Err(GenerationError::Malformed(_))));
    }

    #[test]
    fn test_empty_body_is_empty_payload() {
        assert!(matches!(decode(""), Err(GenerationError::EmptyPayload)));
    }

    #[test]
    fn test_empty_section_list_is_invalid() {
        let mut course = sample_course("Redis");
        course.sections.clear();
        let payload = serde_json::to_string(&course).unwrap();
        assert!(matches!(decode(&payload), Err(GenerationError::Invalid(_))));
    }

    #[test]
    fn test_api_error_maps_to_service() {
        let err = GenerationError::from(LlmError::Api {
            status: 403,
            message: "API key not valid".to_string(),
        });
        assert!(matches!(err, GenerationError::Service { status: 403, .. }));
    }
}
