use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, StatusCode},
    response::Response,
};
use uuid::Uuid;

use crate::{
    adapters::state::AppState, application::error::ApplicationError,
    domain::models::preview::ObjectUrlRegistry,
};

pub struct ObjectController;

impl ObjectController {
    /// GET /objects/{id}
    /// Resolves a live preview handle; revoked handles are 404.
    pub async fn get_object(
        State(registry): State<ObjectUrlRegistry>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, ApplicationError> {
        let object = registry.resolve(&id).ok_or(ApplicationError::NotFound)?;

        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, object.mime_type)
            .header(header::CONTENT_LENGTH, object.content.len())
            .header(header::CACHE_CONTROL, "no-store")
            .body(Body::from(object.content.to_vec()))
            .map_err(|e| ApplicationError::InternalError(e.to_string()))
    }

    /// GET /download
    /// The converted font of the current session as an attachment.
    pub async fn download_converted(
        State(app_state): State<AppState>,
    ) -> Result<Response, ApplicationError> {
        let (object, filename) = {
            let session = app_state.session();
            let converted = session.converted().ok_or(ApplicationError::NotFound)?;
            let object = converted.preview.object().ok_or(ApplicationError::NotFound)?;
            (object, converted.filename.clone())
        };

        Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, object.mime_type)
            .header(header::CONTENT_LENGTH, object.content.len())
            .header(header::CONTENT_DISPOSITION, content_disposition(&filename))
            .body(Body::from(object.content.to_vec()))
            .map_err(|e| ApplicationError::InternalError(e.to_string()))
    }
}

/// `attachment` disposition with an ASCII fallback name and the exact name in
/// RFC 5987 form.
fn content_disposition(filename: &str) -> String {
    let fallback = filename
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>();

    let encoded = filename
        .bytes()
        .map(|b| {
            if b.is_ascii_alphanumeric() || b"-._~".contains(&b) {
                (b as char).to_string()
            } else {
                format!("%{:02X}", b)
            }
        })
        .collect::<String>();

    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        fallback, encoded
    )
}
