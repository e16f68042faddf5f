use thiserror::Error;

use crate::application::error::{
    ApplicationError, CONVERSION_FAILED_MESSAGE, TRANSPORT_FAILED_MESSAGE,
};

#[derive(Debug, Error)]
pub enum ConversionError {
    /// The service answered with a non-success status. `message` is the `message`
    /// field of its JSON body, if there was one.
    #[error("Conversion rejected with status {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<ConversionError> for ApplicationError {
    fn from(error: ConversionError) -> Self {
        match error {
            ConversionError::Rejected { message, .. } => ApplicationError::ConversionRequestFailed(
                message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| CONVERSION_FAILED_MESSAGE.to_string()),
            ),
            ConversionError::NetworkError(_)
            | ConversionError::InvalidRequest(_)
            | ConversionError::InternalError(_) => {
                ApplicationError::ConversionRequestFailed(TRANSPORT_FAILED_MESSAGE.to_string())
            }
        }
    }
}

impl From<reqwest::Error> for ConversionError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ConversionError::NetworkError("Request timeout".to_string())
        } else if error.is_connect() {
            ConversionError::NetworkError(format!("Connection failed: {}", error))
        } else if error.is_builder() {
            ConversionError::InvalidRequest(error.to_string())
        } else if error.is_body() || error.is_decode() || error.is_request() {
            ConversionError::NetworkError(error.to_string())
        } else {
            ConversionError::InternalError(error.to_string())
        }
    }
}
