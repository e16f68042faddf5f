use async_trait::async_trait;
use reqwest::{multipart, Client, Response};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{
    application::{
        error::ApplicationError,
        services::{ConversionOutcome, ConversionService},
    },
    domain::{
        config::converter::{ConverterConfig, FONT_FIELD},
        models::{
            file::{FontFile, DEFAULT_MIME_TYPE},
            verification::{VerificationResult, VERIFICATION_HEADER},
        },
    },
    services::error::ConversionError,
};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Talks to the remote `/convert` endpoint: one multipart `POST` per conversion.
pub struct HttpConversionService {
    client: Client,
    endpoint: String,
}

impl HttpConversionService {
    pub fn new(config: &ConverterConfig) -> Result<Self, ConversionError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_form(font: &FontFile) -> Result<multipart::Form, ConversionError> {
        let mime_type = if font.mime_type.trim().is_empty() {
            DEFAULT_MIME_TYPE
        } else {
            font.mime_type.as_str()
        };

        let part = multipart::Part::bytes(font.content.clone())
            .file_name(font.filename.clone())
            .mime_str(mime_type)
            .map_err(|e| ConversionError::InvalidRequest(e.to_string()))?;

        Ok(multipart::Form::new().part(FONT_FIELD, part))
    }

    /// Must run before the body is consumed.
    fn read_verification(response: &Response) -> Option<VerificationResult> {
        let raw = response.headers().get(VERIFICATION_HEADER)?;

        match VerificationResult::from_header_value(raw.as_bytes()) {
            Ok(verification) => {
                if verification.is_none() {
                    info!("Conversion service reported no verification data");
                }
                verification
            }
            Err(e) => {
                warn!("Ignoring unreadable {} header: {}", VERIFICATION_HEADER, e);
                None
            }
        }
    }

    async fn read_rejection(response: Response) -> ConversionError {
        let status = response.status().as_u16();
        let body = response.bytes().await.unwrap_or_default();

        let message = serde_json::from_slice::<ErrorBody>(&body)
            .map_err(|e| debug!("Error body is not JSON: {}", e))
            .ok()
            .and_then(|b| b.message);

        ConversionError::Rejected { status, message }
    }
}

#[async_trait]
impl ConversionService for HttpConversionService {
    async fn convert(&self, font: &FontFile) -> Result<ConversionOutcome, ApplicationError> {
        let form = Self::build_form(font)?;

        info!(
            "Uploading '{}' ({} bytes) to {}",
            font.filename,
            font.size(),
            self.endpoint
        );

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(ConversionError::from)?;

        if !response.status().is_success() {
            let error = Self::read_rejection(response).await;
            warn!("Conversion of '{}' failed: {}", font.filename, error);
            return Err(error.into());
        }

        let verification = Self::read_verification(&response);

        let font_data = response
            .bytes()
            .await
            .map_err(ConversionError::from)?
            .to_vec();

        info!(
            "Received {} bytes of converted font for '{}'",
            font_data.len(),
            font.filename
        );

        Ok(ConversionOutcome {
            font_data,
            verification,
        })
    }
}
