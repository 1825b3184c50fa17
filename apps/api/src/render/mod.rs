//! Markdown/HTML micro-renderer.
//!
//! Supports exactly three constructs: fenced code blocks, `- ` list lines and
//! paragraphs. Everything else (emphasis, tables, links, nesting) passes
//! through as literal paragraph text. Rendering never fails.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

pub mod handlers;
mod html;

pub use html::{escape_html, render_html};

/// Upstream-produced HTML that is inserted without escaping.
///
/// The generation service is the trust boundary; nothing here sanitizes.
/// Only `from_upstream` constructs one, so plain strings never become markup
/// by accident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    pub fn from_upstream(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Prose is literal display text and is escaped.
    PlainText,
    /// Prose is pre-sanitized inline HTML (ruby-annotated Japanese).
    TrustedHtml,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Inline {
    Text(String),
    Html(TrustedHtml),
}

impl Inline {
    fn new(text: &str, mode: RenderMode) -> Self {
        match mode {
            RenderMode::PlainText => Inline::Text(text.to_string()),
            RenderMode::TrustedHtml => Inline::Html(TrustedHtml::from_upstream(text)),
        }
    }

    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        match self {
            Inline::Text(s) => s,
            Inline::Html(h) => h.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// Literal code. Never interpreted as markup, whatever the mode.
    Code {
        language: Option<String>,
        text: String,
    },
    Bullet {
        inline: Inline,
    },
    Paragraph {
        inline: Inline,
    },
}

const FENCE: &str = "```";

fn fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)```.*?```").expect("fence pattern is valid"))
}

fn opening_fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Za-z0-9_+\-]*)\n").expect("fence tag pattern is valid"))
}

/// Splits `text` into display blocks, preserving the order of code and prose.
pub fn render(text: &str, mode: RenderMode) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    for fenced in fence_regex().find_iter(text) {
        render_prose(&text[cursor..fenced.start()], mode, &mut blocks);
        blocks.push(render_code(fenced.as_str()));
        cursor = fenced.end();
    }
    render_prose(&text[cursor..], mode, &mut blocks);

    blocks
}

fn render_code(fenced: &str) -> Block {
    let inner = &fenced[FENCE.len()..fenced.len() - FENCE.len()];
    match opening_fence_regex().captures(inner) {
        Some(caps) => {
            let tag = &caps[1];
            let body_start = caps.get(0).map_or(0, |m| m.end());
            Block::Code {
                language: (!tag.is_empty()).then(|| tag.to_string()),
                text: inner[body_start..].to_string(),
            }
        }
        // No newline after the opening fence: keep the remainder verbatim.
        None => Block::Code {
            language: None,
            text: inner.to_string(),
        },
    }
}

fn render_prose(segment: &str, mode: RenderMode, blocks: &mut Vec<Block>) {
    for line in segment.lines() {
        if line.trim().is_empty() {
            continue;
        }
        // A lone "- " trims to "-" and stays a paragraph.
        let block = if line.trim().starts_with("- ") {
            let rest = &line.trim_start()["- ".len()..];
            Block::Bullet {
                inline: Inline::new(rest, mode),
            }
        } else {
            Block::Paragraph {
                inline: Inline::new(line, mode),
            }
        };
        blocks.push(block);
    }
}
