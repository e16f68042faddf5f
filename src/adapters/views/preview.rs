use crate::adapters::views::escape_html;

pub const ORIGINAL_FONT_FAMILY: &str = "PreviewFontOriginal";
pub const CONVERTED_FONT_FAMILY: &str = "PreviewFontConverted";

struct Pane<'a> {
    title: &'a str,
    family: &'a str,
    format: &'a str,
    url: Option<&'a str>,
}

impl Pane<'_> {
    fn render(&self, text: &str) -> String {
        let font_family = match self.url {
            Some(_) => format!("'{}'", self.family),
            None => "inherit".to_string(),
        };

        let mut html = String::new();
        html.push_str(r#"<div class="preview-section">"#);
        html.push_str(&format!("<h3>{}</h3>", escape_html(self.title)));
        html.push_str(&format!(
            r#"<div class="preview-text" style="font-family: {}">{}</div>"#,
            escape_html(&font_family),
            escape_html(text)
        ));
        if let Some(url) = self.url {
            html.push_str(&format!(
                "<style>@font-face {{ font-family: '{}'; src: url({}) format('{}'); }}</style>",
                self.family,
                escape_html(url),
                self.format
            ));
        }
        html.push_str("</div>");
        html
    }
}

/// Side-by-side comparison of the original and converted fonts. Each side gets its
/// own `@font-face` name so the two never collide; a side without a URL falls back to
/// the inherited font.
pub fn render_font_preview(
    original_url: Option<&str>,
    converted_url: Option<&str>,
    text: &str,
) -> String {
    let original = Pane {
        title: "Before (OTF)",
        family: ORIGINAL_FONT_FAMILY,
        format: "opentype",
        url: original_url,
    };
    let converted = Pane {
        title: "After (TTF)",
        family: CONVERTED_FONT_FAMILY,
        format: "truetype",
        url: converted_url,
    };

    let mut html = String::new();
    html.push_str(r#"<div class="font-preview"><h2>Font preview</h2>"#);
    html.push_str(r#"<form class="preview-input" method="post" action="/preview-text">"#);
    html.push_str(&format!(
        r#"<textarea name="text" rows="3" placeholder="Type preview text..." oninput="document.querySelectorAll('.preview-text').forEach(function (el) {{ el.textContent = this.value; }}, this)">{}</textarea>"#,
        escape_html(text)
    ));
    html.push_str(r#"<button type="submit">Keep text</button></form>"#);
    html.push_str(r#"<div class="preview-container">"#);
    html.push_str(&original.render(text));
    html.push_str(&converted.render(text));
    html.push_str("</div></div>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_distinct_font_faces() {
        let html = render_font_preview(Some("/objects/a"), Some("/objects/b"), "Abc");

        assert!(html.contains(
            "@font-face { font-family: 'PreviewFontOriginal'; src: url(/objects/a) format('opentype'); }"
        ));
        assert!(html.contains(
            "@font-face { font-family: 'PreviewFontConverted'; src: url(/objects/b) format('truetype'); }"
        ));
        assert!(html.contains("font-family: &#39;PreviewFontOriginal&#39;"));
        assert!(html.contains("font-family: &#39;PreviewFontConverted&#39;"));
    }

    #[test]
    fn missing_handles_fall_back_to_inherit() {
        let html = render_font_preview(None, None, "Abc");

        assert_eq!(html.matches("font-family: inherit").count(), 2);
        assert!(!html.contains("@font-face"));
    }

    #[test]
    fn same_text_in_both_panes() {
        let html = render_font_preview(Some("/objects/a"), None, "1 < 2");

        assert_eq!(html.matches(">1 &lt; 2</div>").count(), 2);
        assert!(html.contains(">1 &lt; 2</textarea>"));
    }
}
