use thiserror::Error;

/// Shown when the chosen file does not end in `.otf`.
pub const INVALID_SELECTION_MESSAGE: &str = "Please select an OTF file.";
/// Shown for a non-success response without a usable `message`.
pub const CONVERSION_FAILED_MESSAGE: &str = "Conversion failed";
/// Shown when the request never produced a response.
pub const TRANSPORT_FAILED_MESSAGE: &str = "Failed to convert the font. Please try again.";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{}", INVALID_SELECTION_MESSAGE)]
    InvalidSelection(String),

    #[error("{0}")]
    ConversionRequestFailed(String),

    #[error("Resource not found")]
    NotFound,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// Text for the inline error area of the UI.
    pub fn user_message(&self) -> String {
        match self {
            ApplicationError::InvalidSelection(_) | ApplicationError::ConversionRequestFailed(_) => {
                self.to_string()
            }
            ApplicationError::NotFound
            | ApplicationError::BadRequest(_)
            | ApplicationError::InternalError(_) => TRANSPORT_FAILED_MESSAGE.to_string(),
        }
    }
}
