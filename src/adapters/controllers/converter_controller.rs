use axum::{
    extract::{Multipart, State},
    response::{Html, Redirect},
    Form,
};
use tracing::{debug, error, info, warn};

use crate::{
    adapters::{
        dto::preview_dto::PreviewTextForm,
        state::{lock_session, AppState},
        views,
    },
    application::error::ApplicationError,
    domain::{
        config::converter::FONT_FIELD,
        models::file::{FontFile, DEFAULT_MIME_TYPE},
    },
};

pub struct ConverterController;

impl ConverterController {
    /// GET /
    pub async fn index(State(app_state): State<AppState>) -> Html<String> {
        let mut session = app_state.session();
        let trigger_download = session.take_pending_download();
        Html(views::page::render_page(&session, trigger_download))
    }

    /// POST /select
    /// Multipart body with the chosen file in the `font` field. A missing or
    /// non-`.otf` file is a rejected selection, shown inline on the page.
    pub async fn select_file(
        State(app_state): State<AppState>,
        mut multipart: Multipart,
    ) -> Result<Redirect, ApplicationError> {
        let mut selected: Option<FontFile> = None;

        while let Some(field) = multipart.next_field().await.map_err(|e| {
            warn!("Invalid multipart data: {}", e);
            ApplicationError::BadRequest("Invalid request format".to_string())
        })? {
            if field.name() != Some(FONT_FIELD) {
                continue;
            }

            let filename = field.file_name().unwrap_or("").to_string();
            let mime_type = field
                .content_type()
                .filter(|ct| !ct.is_empty() && *ct != "application/octet-stream")
                .unwrap_or(DEFAULT_MIME_TYPE)
                .to_string();
            let content = field
                .bytes()
                .await
                .map_err(|e| {
                    warn!("Cannot read file bytes: {}", e);
                    ApplicationError::BadRequest("Invalid file data".to_string())
                })?
                .to_vec();

            selected = Some(FontFile::new(content, filename, mime_type));
        }

        let file = selected.unwrap_or_else(|| {
            info!("Selection without a file");
            FontFile::new(Vec::new(), String::new(), DEFAULT_MIME_TYPE.to_string())
        });

        let selection = app_state.session().select_file(file);
        if let Err(e) = selection {
            // Already recorded in the session; the page renders it inline.
            debug!("Selection rejected: {}", e);
        }

        Ok(Redirect::to("/"))
    }

    /// POST /convert
    /// Issues at most one request to the conversion service; ignored while one is
    /// already in flight. Answers before the conversion finishes; the page refreshes
    /// until the session leaves the converting state.
    pub async fn convert(State(app_state): State<AppState>) -> Redirect {
        let submission = app_state.session().begin_submission();
        let Some(submission) = submission else {
            return Redirect::to("/");
        };

        let fallback = submission.clone();
        let service = app_state.conversion_service.clone();
        let session = app_state.session.clone();

        // Detached so the submitting browser gets the loading page right away.
        let task = tokio::spawn(async move {
            let result = service.convert(submission.file()).await;
            lock_session(&session).finish_submission(submission, result)
        });

        let session = app_state.session.clone();
        tokio::spawn(async move {
            match task.await {
                Ok(completion) => {
                    info!("Submission {} finished: {:?}", fallback.id(), completion)
                }
                Err(e) => {
                    error!(
                        "Conversion task for submission {} failed: {}",
                        fallback.id(),
                        e
                    );
                    lock_session(&session).finish_submission(
                        fallback,
                        Err(ApplicationError::InternalError(e.to_string())),
                    );
                }
            }
        });

        Redirect::to("/")
    }

    /// POST /preview-text
    pub async fn update_preview_text(
        State(app_state): State<AppState>,
        Form(form): Form<PreviewTextForm>,
    ) -> Redirect {
        app_state.session().set_preview_text(form.text);
        Redirect::to("/")
    }
}
