use crate::{application::session::ConvertedFont, domain::models::verification::VerificationResult};

/// Plain-text rendering of a finished conversion, for terminal output.
pub fn render_report(
    source_filename: &str,
    converted: &ConvertedFont,
    verification: Option<&VerificationResult>,
) -> String {
    let mut report = format!(
        "Converted {} -> {} ({} bytes) at {}\n",
        source_filename,
        converted.filename,
        converted.size,
        converted.converted_at.format("%Y-%m-%d %H:%M:%S UTC")
    );

    match verification {
        Some(verification) => report.push_str(&render_verification_report(verification)),
        None => report.push_str("\nVerification data unavailable\n"),
    }

    report
}

pub fn render_verification_report(verification: &VerificationResult) -> String {
    let mut report = String::from("\n=== Font verification ===\n");
    report.push_str(&format!("File name: {}\n", verification.filename));
    report.push_str(&format!("Format: {}\n", verification.format));
    for (label, value) in verification.details.present() {
        report.push_str(&format!("{}: {}\n", label, value));
    }

    report.push_str("\nFont tables:\n");
    for table in &verification.tables {
        report.push_str(&format!("- {}\n", table));
    }

    report
}
