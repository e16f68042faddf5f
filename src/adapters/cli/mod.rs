mod error;

pub use error::CliError;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    adapters::{router::build_router, state::AppState, views::report::render_report},
    application::{error::ApplicationError, session::ConverterSession},
    domain::{
        config::converter::ConverterConfig,
        models::file::{FontFile, DEFAULT_MIME_TYPE},
    },
    services::{create_conversion_service, HttpConversionService},
};

#[derive(Debug)]
pub struct ConvertedOutput {
    pub output_path: PathBuf,
    pub report: String,
}

pub async fn serve(config: &ConverterConfig) -> Result<(), CliError> {
    let app_state = AppState::new(create_conversion_service(config)?);
    let router = build_router(app_state, config.max_upload_bytes);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .map_err(|source| CliError::Bind {
            addr: config.bind_addr,
            source,
        })?;

    info!(
        "Converter UI listening on http://{} (conversion endpoint: {})",
        config.bind_addr, config.endpoint
    );

    axum::serve(listener, router).await.map_err(CliError::Server)
}

/// Headless conversion: select `path`, submit it, write the converted font into
/// `output_dir` under its download name.
pub async fn convert_file(
    config: &ConverterConfig,
    path: &Path,
    output_dir: &Path,
) -> Result<ConvertedOutput, CliError> {
    let service = HttpConversionService::new(config)?;

    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    let content = tokio::fs::read(path).await.map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut session = ConverterSession::default();
    session.select_file(FontFile::new(
        content,
        filename.clone(),
        DEFAULT_MIME_TYPE.to_string(),
    ))?;

    info!("Converting {} via {}", path.display(), service.endpoint());
    session.submit(&service).await.ok_or_else(|| {
        ApplicationError::InternalError("Conversion was not submitted".to_string())
    })?;

    if let Some(error) = session.error() {
        return Err(ApplicationError::ConversionRequestFailed(error.to_string()).into());
    }

    let converted = session.converted().ok_or_else(|| {
        ApplicationError::InternalError("Conversion produced no font".to_string())
    })?;
    let object = converted.preview.object().ok_or(ApplicationError::NotFound)?;

    let output_path = output_dir.join(&converted.filename);
    tokio::fs::write(&output_path, &object.content[..])
        .await
        .map_err(|source| CliError::Io {
            path: output_path.clone(),
            source,
        })?;

    Ok(ConvertedOutput {
        report: render_report(&filename, converted, session.verification()),
        output_path,
    })
}
