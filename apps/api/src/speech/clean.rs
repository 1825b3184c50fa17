use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::models::course::Language;

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>?").expect("tag pattern is valid"))
}

/// An `<rt>`/`<rp>` element ends at its own close tag, or implicitly where the
/// next annotation or the enclosing `</ruby>` begins. That boundary tag is
/// captured so it can be put back.
fn annotation_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?is)<r[tp]\b[^>]*>.*?(?:</r[tp]\s*>|(<r[tp]\b|</ruby\b))")
            .expect("annotation pattern is valid")
    })
}

fn entity_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"&(?:#[xX]([0-9a-fA-F]{1,6})|#([0-9]{1,7})|(amp|lt|gt|quot|apos|nbsp));")
            .expect("entity pattern is valid")
    })
}

/// Produces the plain text handed to the speech engine.
///
/// Japanese: reading annotations (`<rt>`, `<rp>`) are dropped with their
/// content, then the remaining markup is reduced to its text content.
/// Everything else: literal tag removal only.
pub fn clean_for_speech(text: &str, language_tag: &str) -> String {
    match Language::from_speech_tag(language_tag) {
        Some(lang) if lang.is_annotated() => text_content(&strip_annotations(text)),
        _ => strip_tags(text),
    }
}

fn strip_tags(text: &str) -> String {
    tag_regex().replace_all(text, "").into_owned()
}

/// Each pass may stop at an annotation that an implicitly closed one ran
/// into, so repeat until nothing is left to remove.
fn strip_annotations(html: &str) -> String {
    let mut current = html.to_string();
    loop {
        let next = annotation_regex().replace_all(&current, "$1").into_owned();
        if next == current {
            return current;
        }
        current = next;
    }
}

fn text_content(html: &str) -> String {
    decode_entities(&strip_tags(html))
}

/// Decodes named basics and numeric references in one pass, so `&amp;lt;`
/// stays `&lt;`. Invalid code points are left as written.
fn decode_entities(text: &str) -> String {
    entity_regex()
        .replace_all(text, |caps: &Captures| {
            let decoded = if let Some(hex) = caps.get(1) {
                u32::from_str_radix(hex.as_str(), 16).ok().and_then(char::from_u32)
            } else if let Some(dec) = caps.get(2) {
                dec.as_str().parse::<u32>().ok().and_then(char::from_u32)
            } else {
                match &caps[3] {
                    "amp" => Some('&'),
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "quot" => Some('"'),
                    "apos" => Some('\''),
                    _ => Some(' '),
                }
            };
            decoded.map_or_else(|| caps[0].to_string(), String::from)
        })
        .into_owned()
}
