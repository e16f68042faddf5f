use async_trait::async_trait;

use crate::{
    application::error::ApplicationError,
    domain::models::{file::FontFile, verification::VerificationResult},
};

/// Successful answer of the conversion service.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub font_data: Vec<u8>,
    /// `None` when the verification header was missing, `null` or unreadable.
    pub verification: Option<VerificationResult>,
}

#[async_trait]
pub trait ConversionService: Send + Sync {
    async fn convert(&self, font: &FontFile) -> Result<ConversionOutcome, ApplicationError>;
}
