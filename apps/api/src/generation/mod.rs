// Content Requester: builds the structured course request, sends it through
// llm_client, validates the response. All model calls go through llm_client.

pub mod generator;
pub mod prompts;
pub mod schema;

pub use generator::{CourseGenerator, GeminiCourseGenerator, GenerationError};
