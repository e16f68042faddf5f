mod error;
mod http_conversion;

pub use error::ConversionError;
pub use http_conversion::HttpConversionService;

use std::sync::Arc;

use crate::{application::services::ConversionService, domain::config::converter::ConverterConfig};

pub fn create_conversion_service(
    config: &ConverterConfig,
) -> Result<Arc<dyn ConversionService>, ConversionError> {
    let service = HttpConversionService::new(config)?;
    Ok(Arc::new(service))
}
