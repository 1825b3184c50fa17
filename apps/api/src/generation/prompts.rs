// Prompt constants for course generation.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Course system instruction.
/// Replace: {topic}, {json_instruction}, {language_rules}
pub const COURSE_SYSTEM_TEMPLATE: &str = r#"You are an expert DevOps Technical Instructor.
Your goal is to explain the technology "{topic}" comprehensively, from basic concepts to practical application.

Structure the course with these sections, in this order:
1. What is it? (Core Concept)
2. Architecture & Components
3. Key Features
4. Hands-on Practical Guide (Commands, Code Snippets, Configuration)
5. Best Practices & Pitfalls

CRITICAL LANGUAGE REQUIREMENTS:
{json_instruction}
{language_rules}"#;

/// User turn. Replace: {topic}
pub const COURSE_PROMPT_TEMPLATE: &str = "Create a complete guide for {topic}.";

/// Low temperature favours consistent structure over creative variation.
pub const COURSE_TEMPERATURE: f32 = 0.3;
