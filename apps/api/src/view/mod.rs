//! Server-side page composition: topic sidebar, the four loading states,
//! overview card, section cards and table of contents.
//!
//! English and Chinese are escaped Markdown-subset text; Japanese is trusted
//! ruby HTML. The page talks back to the JSON API through a tiny script.

use std::fmt::Write;

use crate::catalog::CATEGORIES;
use crate::models::course::{Course, Language, Section, TrilingualText};
use crate::render::{escape_html, render_html, RenderMode};
use crate::session::{LoadingState, SessionSnapshot};

mod assets;
pub mod handlers;

use assets::{PAGE_SCRIPT, PAGE_STYLE};

/// Seconds between automatic reloads while a course is generating.
const LOADING_REFRESH_SECS: u32 = 2;

#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    pub show_ruby: bool,
    pub speech_available: bool,
}

pub fn render_page(snapshot: &SessionSnapshot, options: PageOptions) -> String {
    let refresh = if snapshot.state == LoadingState::Loading {
        format!("<meta http-equiv=\"refresh\" content=\"{LOADING_REFRESH_SECS}\">")
    } else {
        String::new()
    };
    let current_id = snapshot.topic.as_ref().map(|t| t.id);

    let main = match snapshot.state {
        LoadingState::Idle => idle_pane(),
        LoadingState::Loading => loading_pane(snapshot.topic.as_ref().map_or("", |t| t.name)),
        LoadingState::Error => error_pane(snapshot.error.as_deref().unwrap_or_default()),
        LoadingState::Success => match &snapshot.course {
            Some(course) => course_pane(course, options),
            None => idle_pane(),
        },
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         {refresh}<title>DevOps Polyglot</title>\n<style>{PAGE_STYLE}</style>\n</head>\n\
         <body>\n{sidebar}<main>{main}</main>\n<script>{PAGE_SCRIPT}</script>\n</body>\n</html>\n",
        sidebar = sidebar(current_id),
    )
}

fn sidebar(current_id: Option<&str>) -> String {
    let mut html = String::from(
        "<aside class=\"sidebar\"><h1>DevOps<br>Polyglot</h1><p class=\"tagline\">EN / ZH / JA Learning Hub</p><nav>",
    );
    for category in CATEGORIES {
        let _ = write!(html, "<h2>{}</h2><ul>", escape_html(category.title));
        for topic in category.topics {
            let active = if Some(topic.id) == current_id {
                " class=\"active\""
            } else {
                ""
            };
            let _ = write!(
                html,
                "<li><button data-topic=\"{}\"{active}>{}</button></li>",
                escape_html(topic.id),
                escape_html(topic.name)
            );
        }
        html.push_str("</ul>");
    }
    html.push_str("</nav><footer>Powered by Google Gemini</footer></aside>\n");
    html
}

fn idle_pane() -> String {
    "<section class=\"pane idle\"><h2>Select a technology to start learning</h2>\
     <p>Choose a topic from the sidebar (AWS, Docker, K8s, etc.) to generate a comprehensive, \
     tri-lingual guide using AI.</p>\
     <div class=\"chips\"><span>English</span><span>中文</span><span>日本語 (Ruby)</span></div></section>"
        .to_string()
}

fn loading_pane(topic_name: &str) -> String {
    format!(
        "<section class=\"pane loading\"><div class=\"spinner\"></div>\
         <h3>Generating Curriculum for {}...</h3>\
         <p>Translating concepts, writing code snippets, and adding furigana...</p></section>",
        escape_html(topic_name)
    )
}

fn error_pane(message: &str) -> String {
    format!(
        "<section class=\"pane error\"><h3>Generation Failed</h3><p>{}</p>\
         <button id=\"retry\">Try Again</button></section>",
        escape_html(message)
    )
}

fn course_pane(course: &Course, options: PageOptions) -> String {
    let ruby_class = if options.show_ruby { "" } else { " hide-ruby" };
    let ruby_link = if options.show_ruby {
        "<a class=\"toggle on\" href=\"/?ruby=off\">Ruby (Furigana): on</a>"
    } else {
        "<a class=\"toggle\" href=\"/\">Ruby (Furigana): off</a>"
    };

    let mut html = String::new();
    html.push_str(&table_of_contents(&course.sections));
    let _ = write!(
        html,
        "<header class=\"course-header\"><h1>{}</h1>{ruby_link}</header>",
        escape_html(&course.topic)
    );
    html.push_str(&overview_card(&course.overview, ruby_class, options));
    for (index, section) in course.sections.iter().enumerate() {
        html.push_str(&section_card(index, section, ruby_class, options));
    }
    html.push_str(
        "<p class=\"disclaimer\">Content generated by AI. Always verify critical commands in a sandbox environment.</p>",
    );
    html
}

fn table_of_contents(sections: &[Section]) -> String {
    if sections.is_empty() {
        return String::new();
    }
    let mut html = String::from("<nav class=\"toc\"><span>Contents</span><ol>");
    for (index, section) in sections.iter().enumerate() {
        let _ = write!(
            html,
            "<li><a href=\"#section-{index}\">{}</a></li>",
            escape_html(&section.title.en)
        );
    }
    html.push_str("</ol></nav>");
    html
}

fn speak_button(text: &str, language: Language, options: PageOptions) -> String {
    if !options.speech_available {
        return String::new();
    }
    format!(
        "<button class=\"speak\" title=\"Read aloud\" data-lang=\"{}\" data-text=\"{}\">🔊</button>",
        language.speech_tag(),
        escape_html(text)
    )
}

fn overview_card(overview: &TrilingualText, ruby_class: &str, options: PageOptions) -> String {
    let mut html = String::from("<section class=\"overview\"><h2>Course Overview</h2>");
    for language in Language::ALL {
        let text = overview.get(language);
        let body = if language.is_annotated() {
            text.to_string()
        } else {
            escape_html(text)
        };
        let class = if language.is_annotated() { ruby_class } else { "" };
        let _ = write!(
            html,
            "<div class=\"lang lang-{code}{class}\"><h4>{label}{button}</h4><p>{body}</p></div>",
            code = language.speech_tag(),
            label = language.label(),
            button = speak_button(text, language, options),
        );
    }
    html.push_str("</section>");
    html
}

fn section_card(
    index: usize,
    section: &Section,
    ruby_class: &str,
    options: PageOptions,
) -> String {
    let mut html = format!(
        "<article class=\"section\" id=\"section-{index}\"><header>\
         <h3>{number}. {en}</h3><h3>{zh}</h3><h3 class=\"{ruby_class}\">{ja}</h3></header><div class=\"columns\">",
        number = index + 1,
        en = escape_html(&section.title.en),
        zh = escape_html(&section.title.zh),
        ja = section.title.ja,
    );
    for language in Language::ALL {
        let content = section.content.get(language);
        let (mode, class) = if language.is_annotated() {
            (RenderMode::TrustedHtml, ruby_class)
        } else {
            (RenderMode::PlainText, "")
        };
        let _ = write!(
            html,
            "<div class=\"lang lang-{code}{class}\"><h4>{label}{button}</h4>{body}</div>",
            code = language.speech_tag(),
            label = language.label(),
            button = speak_button(content, language, options),
            body = render_html(content, mode),
        );
    }
    html.push_str("</div></article>");
    html
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::catalog::find_topic;
    use crate::models::course::fixtures::sample_course;

    const OPTIONS: PageOptions = PageOptions {
        show_ruby: true,
        speech_available: true,
    };

    fn snapshot(state: LoadingState, course: Option<Course>) -> SessionSnapshot {
        SessionSnapshot {
            state,
            topic: find_topic("docker").cloned(),
            error: (state == LoadingState::Error).then(|| "Failed to generate".to_string()),
            course: course.map(Arc::new),
            sequence: 1,
            updated_at: None,
        }
    }

    #[test]
    fn test_idle_page_lists_catalog() {
        let mut idle = snapshot(LoadingState::Idle, None);
        idle.topic = None;
        let page = render_page(&idle, OPTIONS);
        assert!(page.contains("Select a technology to start learning"));
        assert!(page.contains("data-topic=\"terraform\""));
        assert!(!page.contains("class=\"active\""));
    }

    #[test]
    fn test_loading_page_refreshes_and_marks_topic() {
        let page = render_page(&snapshot(LoadingState::Loading, None), OPTIONS);
        assert!(page.contains("http-equiv=\"refresh\""));
        assert!(page.contains("Generating Curriculum for Docker..."));
        assert!(page.contains("data-topic=\"docker\" class=\"active\""));
    }

    #[test]
    fn test_error_page_offers_retry() {
        let page = render_page(&snapshot(LoadingState::Error, None), OPTIONS);
        assert!(page.contains("Generation Failed"));
        assert!(page.contains("id=\"retry\""));
        assert!(!page.contains("http-equiv=\"refresh\""));
    }

    #[test]
    fn test_course_page_escapes_code_and_keeps_ruby() {
        let page = render_page(
            &snapshot(LoadingState::Success, Some(sample_course("Docker"))),
            OPTIONS,
        );
        assert!(page.contains("<a href=\"#section-0\">Hands-on Guide</a>"));
        assert!(page.contains("<ruby>実践<rt>じっせん</rt></ruby>ガイド"));
        assert!(page.contains("docker run &lt;image&gt;"));
        assert!(page.contains("<span class=\"marker\">•</span> <span>Install the CLI</span>"));
        assert!(page.contains("data-lang=\"ja-JP\""));
    }

    #[test]
    fn test_hidden_ruby_and_no_speech() {
        let options = PageOptions {
            show_ruby: false,
            speech_available: false,
        };
        let page = render_page(
            &snapshot(LoadingState::Success, Some(sample_course("Docker"))),
            options,
        );
        assert!(page.contains("hide-ruby"));
        assert!(page.contains("href=\"/\">Ruby (Furigana): off"));
        assert!(!page.contains("class=\"speak\""));
    }
}
