use serde::{Deserialize, Serialize};

/// The three course languages. Japanese is the pronunciation-annotated one:
/// its text is HTML with `<ruby>` readings over every Kanji run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Zh,
    Ja,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Zh, Language::Ja];

    /// BCP-47 tag handed to the speech engine.
    pub fn speech_tag(self) -> &'static str {
        match self {
            Language::En => "en-US",
            Language::Zh => "zh-CN",
            Language::Ja => "ja-JP",
        }
    }

    /// Matches on the primary subtag, so `ja`, `ja-JP` and `JA-jp` all map to Japanese.
    pub fn from_speech_tag(tag: &str) -> Option<Self> {
        let primary = tag.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "zh" => Some(Language::Zh),
            "ja" => Some(Language::Ja),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Zh => "中文",
            Language::Ja => "日本語",
        }
    }

    /// True when content in this language arrives as trusted inline HTML.
    pub fn is_annotated(self) -> bool {
        matches!(self, Language::Ja)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrilingualText {
    pub en: String,
    pub zh: String,
    pub ja: String,
}

impl TrilingualText {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Zh => &self.zh,
            Language::Ja => &self.ja,
        }
    }

    /// Returns the first language whose text is blank, if any.
    fn first_blank(&self) -> Option<Language> {
        Language::ALL
            .into_iter()
            .find(|lang| self.get(*lang).trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: TrilingualText,
    pub content: TrilingualText,
}

/// One generated course. Built once per successful generation and never
/// mutated afterwards; a new topic or a retry replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub topic: String,
    pub overview: TrilingualText,
    pub sections: Vec<Section>,
}

impl Course {
    /// Checks the invariants serde cannot express: every text present and
    /// non-blank, at least one section.
    pub fn validate(&self) -> Result<(), String> {
        if self.topic.trim().is_empty() {
            return Err("topic is empty".to_string());
        }
        if let Some(lang) = self.overview.first_blank() {
            return Err(format!("overview.{} is empty", lang_key(lang)));
        }
        if self.sections.is_empty() {
            return Err("sections is empty".to_string());
        }
        for (i, section) in self.sections.iter().enumerate() {
            if let Some(lang) = section.title.first_blank() {
                return Err(format!("sections[{i}].title.{} is empty", lang_key(lang)));
            }
            if let Some(lang) = section.content.first_blank() {
                return Err(format!("sections[{i}].content.{} is empty", lang_key(lang)));
            }
        }
        Ok(())
    }
}

fn lang_key(lang: Language) -> &'static str {
    match lang {
        Language::En => "en",
        Language::Zh => "zh",
        Language::Ja => "ja",
    }
}
