// Shared prompt fragments.
// Each service that needs model calls defines its own prompts.rs alongside it.
// This file contains cross-cutting instruction text.

/// Instruction that enforces schema-conforming JSON output.
pub const JSON_ONLY_INSTRUCTION: &str =
    "Output MUST be in strictly valid JSON format matching the schema.";

/// Per-language authoring rules. These are enforced by instruction only;
/// the renderer and speech adapter tolerate deviations.
pub const LANGUAGE_RULES: &str = "\
English (en): Professional technical English. Use Markdown for code blocks, \
paragraphs separated by blank lines, and lines starting with \"- \" for lists.
Chinese (zh): Simplified Chinese. Professional terminology. Same Markdown subset as English.
Japanese (ja):
   - MUST use HTML <ruby> tags for EVERY Kanji character in the text.
   - Format: <ruby>漢字<rt>かんじ</rt></ruby>
   - Example: <ruby>設定<rt>せってい</rt></ruby>ファイルを<ruby>作成<rt>さくせい</rt></ruby>します。
   - Do NOT use ruby tags inside code blocks (keep code blocks as standard Markdown).
   - Ensure the Japanese is natural and professional.";
