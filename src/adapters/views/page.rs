use crate::{
    adapters::views::{
        escape_html, preview::render_font_preview, verification::render_verification,
    },
    application::session::ConverterSession,
};

const STYLE: &str = r#"
body { margin: 0; font-family: system-ui, sans-serif; background: #282c34; color: #fff; }
.App-header { display: flex; flex-direction: column; align-items: center; padding: 2rem; }
.converter-container { width: 100%; max-width: 960px; }
.file-input-container, .file-info, .converted-info { margin: 1rem 0; }
.error-message { color: #ff6b6b; }
.convert-button[disabled] { opacity: 0.6; cursor: wait; }
.preview-input textarea { width: 100%; font-size: 1rem; }
.preview-container { display: flex; gap: 1rem; }
.preview-section { flex: 1; background: #fff; color: #222; padding: 1rem; border-radius: 6px; }
.preview-text { white-space: pre-wrap; font-size: 1.5rem; }
.verification-details { display: flex; gap: 2rem; }
"#;

/// Full converter page for the current session state.
pub fn render_page(session: &ConverterSession, trigger_download: bool) -> String {
    let loading = session.is_loading();
    let mut html = String::new();

    html.push_str(r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8">"#);
    html.push_str("<title>OTF to TTF Converter</title>");
    if loading {
        html.push_str(r#"<meta http-equiv="refresh" content="1">"#);
    }
    html.push_str(&format!("<style>{}</style></head><body>", STYLE));
    html.push_str(r#"<div class="App"><header class="App-header"><h1>OTF to TTF Converter</h1>"#);
    html.push_str(&format!(
        r#"<div class="converter-container" data-state="{}">"#,
        session.state().as_str()
    ));

    html.push_str(
        r#"<form class="file-input-container" method="post" action="/select" enctype="multipart/form-data">"#,
    );
    html.push_str(r#"<label for="font-file" class="file-input-label">Select OTF Font File</label> "#);
    html.push_str(
        r#"<input id="font-file" type="file" name="font" accept=".otf" class="file-input" aria-label="Select OTF font file" onchange="this.form.submit()">"#,
    );
    html.push_str(r#"<noscript><button type="submit">Select</button></noscript></form>"#);

    if let Some(error) = session.error() {
        html.push_str(&format!(
            r#"<p class="error-message" role="alert">{}</p>"#,
            escape_html(error)
        ));
    }

    if let Some(selected) = session.selected() {
        let (label, aria, disabled) = if !session.can_submit() {
            ("Converting...", "Converting font file...", " disabled")
        } else {
            ("Convert to TTF", "Convert to TTF", "")
        };
        html.push_str(&format!(
            r#"<div class="file-info"><p>Selected file: {}</p><form method="post" action="/convert"><button type="submit" class="convert-button" aria-label="{}"{}>{}</button></form></div>"#,
            escape_html(&selected.file.filename),
            aria,
            disabled,
            label
        ));
    }

    if let Some(converted) = session.converted() {
        let filename = escape_html(&converted.filename);
        html.push_str(&format!(
            r#"<p class="converted-info">Converted: <a href="/download" download="{}">{}</a> ({} bytes, {})</p>"#,
            filename,
            filename,
            converted.size,
            converted.converted_at.format("%H:%M:%S UTC")
        ));
        if trigger_download {
            html.push_str(&format!(
                r#"<a id="auto-download" href="/download" download="{}" hidden></a><script>document.getElementById('auto-download').click();</script>"#,
                filename
            ));
        }
    }

    let original_url = session.selected().map(|s| s.preview.url());
    let converted_url = session.converted().map(|c| c.preview.url());
    html.push_str(&render_font_preview(
        original_url.as_deref(),
        converted_url.as_deref(),
        session.preview_text(),
    ));

    if let Some(verification) = session.verification() {
        html.push_str(&render_verification(verification));
    }

    html.push_str("</div></header></div></body></html>");
    html
}
