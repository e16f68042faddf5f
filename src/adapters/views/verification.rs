use crate::{adapters::views::escape_html, domain::models::verification::VerificationResult};

pub fn render_verification(verification: &VerificationResult) -> String {
    let mut html = String::new();

    html.push_str(r#"<div class="verification-result"><h2>Font verification</h2>"#);
    html.push_str(r#"<div class="verification-details">"#);

    html.push_str(r#"<div class="verification-section"><h3>Basic information</h3>"#);
    html.push_str(&field("File name", &verification.filename));
    html.push_str(&field("Format", &verification.format));
    for (label, value) in verification.details.present() {
        html.push_str(&field(label, value));
    }
    html.push_str("</div>");

    html.push_str(r#"<div class="verification-section"><h3>Font tables</h3><ul class="font-tables">"#);
    for table in &verification.tables {
        html.push_str(&format!("<li>{}</li>", escape_html(table)));
    }
    html.push_str("</ul></div>");

    html.push_str("</div></div>");
    html
}

fn field(label: &str, value: &str) -> String {
    format!(
        "<p><strong>{}:</strong> {}</p>",
        escape_html(label),
        escape_html(value)
    )
}
