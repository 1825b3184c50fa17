use super::{render, Block, Inline, RenderMode};

/// Minimal HTML escaping for text content and attribute values.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

impl Inline {
    pub fn to_html(&self) -> String {
        match self {
            Inline::Text(text) => escape_html(text),
            Inline::Html(html) => html.as_str().to_string(),
        }
    }
}

impl Block {
    pub fn to_html(&self) -> String {
        match self {
            Block::Code { language, text } => {
                let class = language
                    .as_deref()
                    .map(|l| format!(" class=\"language-{}\"", escape_html(l)))
                    .unwrap_or_default();
                format!("<pre><code{class}>{}</code></pre>", escape_html(text))
            }
            Block::Bullet { inline } => format!(
                "<div class=\"bullet\"><span class=\"marker\">•</span> <span>{}</span></div>",
                inline.to_html()
            ),
            Block::Paragraph { inline } => format!("<p>{}</p>", inline.to_html()),
        }
    }
}

/// Renders `text` straight to an HTML fragment.
pub fn render_html(text: &str, mode: RenderMode) -> String {
    render(text, mode).iter().map(Block::to_html).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_escaped() {
        assert_eq!(
            render_html("Use <b>x</b> & y", RenderMode::PlainText),
            "<p>Use &lt;b&gt;x&lt;/b&gt; &amp; y</p>"
        );
    }

    #[test]
    fn test_trusted_html_is_inserted_verbatim() {
        assert_eq!(
            render_html("- <ruby>設定<rt>せってい</rt></ruby>", RenderMode::TrustedHtml),
            "<div class=\"bullet\"><span class=\"marker\">•</span> <span><ruby>設定<rt>せってい</rt></ruby></span></div>"
        );
    }

    #[test]
    fn test_code_is_escaped_in_html_mode() {
        assert_eq!(
            render_html("```html\n<a href=\"x\">\n```", RenderMode::TrustedHtml),
            "<pre><code class=\"language-html\">&lt;a href=&quot;x&quot;&gt;\n</code></pre>"
        );
    }
}
