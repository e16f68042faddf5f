mod common;

use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::http::StatusCode;
use font_preview_client::{
    adapters::cli::{convert_file, CliError},
    application::error::ApplicationError,
    domain::config::converter::ConverterConfig,
};

use common::{ConversionStub, StubReply, OTF_BYTES, SAMPLE_VERIFICATION, TTF_BYTES};

struct TestDir {
    path: PathBuf,
}

impl TestDir {
    fn new(tag: &str) -> Self {
        let ts = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let path = std::env::temp_dir().join(format!(
            "font_preview_cli_{tag}_{}_{}",
            std::process::id(),
            ts
        ));
        fs::create_dir_all(&path).expect("create temp test dir");
        Self { path }
    }

    fn font(&self, name: &str) -> PathBuf {
        let path = self.path.join(name);
        fs::write(&path, OTF_BYTES).expect("write font");
        path
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

fn config_for(endpoint: &str) -> ConverterConfig {
    ConverterConfig {
        endpoint: endpoint.to_string(),
        ..ConverterConfig::default()
    }
}

#[tokio::test]
async fn writes_converted_font_and_reports_verification() {
    let stub = ConversionStub::start(StubReply::converted(Some(SAMPLE_VERIFICATION))).await;
    let dir = TestDir::new("success");
    let input = dir.font("Sample.OTF");

    let output = convert_file(&config_for(&stub.endpoint), &input, &dir.path)
        .await
        .expect("conversion succeeds");

    assert_eq!(output.output_path, dir.path.join("Sample.TTF"));
    assert_eq!(fs::read(&output.output_path).unwrap(), TTF_BYTES);
    assert!(output.report.contains("Converted Sample.OTF -> Sample.TTF"));
    assert!(output.report.contains("Family: Test\n"));
    assert!(output.report.contains("- cmap\n- glyf\n"));
}

#[tokio::test]
async fn wrong_extension_is_an_invalid_selection() {
    let stub = ConversionStub::start(StubReply::converted(None)).await;
    let dir = TestDir::new("woff");
    let input = dir.font("font.woff");

    let err = convert_file(&config_for(&stub.endpoint), &input, &dir.path)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CliError::Conversion(ApplicationError::InvalidSelection(ref name)) if name == "font.woff"
    ));
    assert_eq!(err.to_string(), "Please select an OTF file.");
    assert_eq!(stub.calls(), 0);
}

#[tokio::test]
async fn rejected_conversion_carries_the_server_message() {
    let stub = ConversionStub::start(StubReply::failed(
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"message":"bad font"}"#,
    ))
    .await;
    let dir = TestDir::new("rejected");
    let input = dir.font("a.otf");

    let err = convert_file(&config_for(&stub.endpoint), &input, &dir.path)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CliError::Conversion(ApplicationError::ConversionRequestFailed(ref msg)) if msg == "bad font"
    ));
    assert!(!dir.path.join("a.ttf").exists());
}

#[tokio::test]
async fn missing_input_is_an_io_error() {
    let dir = TestDir::new("missing");
    let input = dir.path.join("absent.otf");

    let err = convert_file(&config_for("http://127.0.0.1:9/convert"), &input, &dir.path)
        .await
        .unwrap_err();

    match err {
        CliError::Io { path, .. } => assert_eq!(path, input),
        other => panic!("unexpected error: {:?}", other),
    }
}
