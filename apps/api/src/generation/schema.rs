//! Response schema sent with every course request.
//!
//! Uses the OpenAPI subset Gemini accepts (uppercase type names).
//! Bump `SCHEMA_VERSION` whenever the shape changes.

use serde_json::{json, Value};

pub const SCHEMA_VERSION: u32 = 1;

fn trilingual(descriptions: Option<[&str; 3]>) -> Value {
    let field = |desc: Option<&str>| match desc {
        Some(d) => json!({ "type": "STRING", "description": d }),
        None => json!({ "type": "STRING" }),
    };
    let [en, zh, ja] = match descriptions {
        Some([en, zh, ja]) => [Some(en), Some(zh), Some(ja)],
        None => [None, None, None],
    };
    json!({
        "type": "OBJECT",
        "properties": {
            "en": field(en),
            "zh": field(zh),
            "ja": field(ja),
        },
        "required": ["en", "zh", "ja"],
    })
}

/// Builds the course response schema.
pub fn course_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "topic": { "type": "STRING" },
            "overview": trilingual(None),
            "sections": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": trilingual(None),
                        "content": trilingual(Some([
                            "Markdown supported",
                            "Markdown supported",
                            "HTML with <ruby> tags mandatory for Kanji",
                        ])),
                    },
                    "required": ["title", "content"],
                },
            },
        },
        "required": ["topic", "overview", "sections"],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_requires_top_level_fields() {
        let schema = course_schema();
        assert_eq!(
            schema["required"],
            json!(["topic", "overview", "sections"])
        );
        assert_eq!(schema["properties"]["sections"]["type"], "ARRAY");
    }

    #[test]
    fn test_schema_describes_japanese_content_as_html() {
        let schema = course_schema();
        let ja = &schema["properties"]["sections"]["items"]["properties"]["content"]["properties"]["ja"];
        assert_eq!(ja["description"], "HTML with <ruby> tags mandatory for Kanji");
        let title_ja = &schema["properties"]["sections"]["items"]["properties"]["title"]["properties"]["ja"];
        assert!(title_ja.get("description").is_none());
    }
}
