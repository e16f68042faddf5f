use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::{
    application::{
        error::{ApplicationError, INVALID_SELECTION_MESSAGE},
        services::{ConversionOutcome, ConversionService},
    },
    domain::models::{
        file::FontFile,
        preview::{ObjectUrlRegistry, PreviewHandle},
        verification::VerificationResult,
    },
};

pub const DEFAULT_PREVIEW_TEXT: &str =
    "こんにちは、世界！\nThe quick brown fox jumps over the lazy dog\n1234567890";

const CONVERTED_MIME_TYPE: &str = "font/ttf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    FileSelected,
    Converting,
    Converted,
    Failed,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::FileSelected => "file-selected",
            SessionState::Converting => "converting",
            SessionState::Converted => "converted",
            SessionState::Failed => "failed",
        }
    }
}

#[derive(Debug)]
pub struct SelectedFont {
    pub file: FontFile,
    pub preview: PreviewHandle,
}

#[derive(Debug)]
pub struct ConvertedFont {
    pub preview: PreviewHandle,
    pub filename: String,
    pub size: u64,
    pub converted_at: DateTime<Utc>,
}

/// Ticket for one conversion request. Its result is applied only while the ticket
/// is still the session's current one.
#[derive(Debug, Clone)]
pub struct Submission {
    id: u64,
    file: FontFile,
}

impl Submission {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn file(&self) -> &FontFile {
        &self.file
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Stale,
}

/// All UI state for one converter session. Preview handles it owns are revoked when
/// they are replaced and when the session is dropped.
pub struct ConverterSession {
    registry: ObjectUrlRegistry,
    selected: Option<SelectedFont>,
    error: Option<String>,
    verification: Option<VerificationResult>,
    converted: Option<ConvertedFont>,
    preview_text: String,
    in_flight: Option<u64>,
    generation: u64,
    pending_download: bool,
}

impl ConverterSession {
    pub fn new(registry: ObjectUrlRegistry) -> Self {
        Self {
            registry,
            selected: None,
            error: None,
            verification: None,
            converted: None,
            preview_text: DEFAULT_PREVIEW_TEXT.to_string(),
            in_flight: None,
            generation: 0,
            pending_download: false,
        }
    }

    pub fn registry(&self) -> &ObjectUrlRegistry {
        &self.registry
    }

    /// Accepts `.otf` files only. Any selection, valid or not, invalidates a
    /// conversion still in flight.
    pub fn select_file(&mut self, file: FontFile) -> Result<(), ApplicationError> {
        self.generation += 1;
        self.verification = None;
        self.converted = None;
        self.pending_download = false;

        if !file.is_accepted() {
            warn!("Rejected selection of '{}'", file.filename);
            self.selected = None;
            self.error = Some(INVALID_SELECTION_MESSAGE.to_string());
            return Err(ApplicationError::InvalidSelection(file.filename));
        }

        info!("Selected '{}' ({} bytes)", file.filename, file.size());

        // Drop the old original preview before registering the new one.
        self.selected = None;
        let preview = self.registry.create(file.content.clone(), &file.mime_type);
        self.selected = Some(SelectedFont { file, preview });
        self.error = None;

        Ok(())
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && self.in_flight.is_none()
    }

    /// Starts a conversion. Returns `None` when there is nothing to convert or a
    /// request is already in flight.
    pub fn begin_submission(&mut self) -> Option<Submission> {
        if self.in_flight.is_some() {
            info!("Conversion already in progress, ignoring submit");
            return None;
        }
        let file = self.selected.as_ref()?.file.clone();

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.error = None;
        self.verification = None;
        self.converted = None;
        self.pending_download = false;

        info!("Submission {} started for '{}'", self.generation, file.filename);

        Some(Submission {
            id: self.generation,
            file,
        })
    }

    /// Single completion path for both outcomes. Always clears the loading flag for
    /// its own ticket; verification and converted preview change together or not at all.
    pub fn finish_submission(
        &mut self,
        submission: Submission,
        result: Result<ConversionOutcome, ApplicationError>,
    ) -> Completion {
        if self.in_flight == Some(submission.id) {
            self.in_flight = None;
        }

        if submission.id != self.generation {
            warn!(
                "Discarding stale result of submission {} (current is {})",
                submission.id, self.generation
            );
            return Completion::Stale;
        }

        match result {
            Ok(outcome) => {
                self.converted = None;
                let size = outcome.font_data.len() as u64;
                let preview = self.registry.create(outcome.font_data, CONVERTED_MIME_TYPE);
                let filename = submission.file.converted_filename();

                info!(
                    "Submission {} converted '{}' -> '{}' ({} bytes, verification {})",
                    submission.id,
                    submission.file.filename,
                    filename,
                    size,
                    if outcome.verification.is_some() {
                        "present"
                    } else {
                        "unavailable"
                    }
                );

                self.verification = outcome.verification;
                self.converted = Some(ConvertedFont {
                    preview,
                    filename,
                    size,
                    converted_at: Utc::now(),
                });
                self.error = None;
                self.pending_download = true;
            }
            Err(e) => {
                warn!("Submission {} failed: {}", submission.id, e);
                self.error = Some(e.user_message());
                self.verification = None;
                self.converted = None;
                self.pending_download = false;
            }
        }

        Completion::Applied
    }

    /// Runs one full conversion against `service`. Returns `None` if no request was
    /// issued.
    pub async fn submit(&mut self, service: &dyn ConversionService) -> Option<Completion> {
        let submission = self.begin_submission()?;
        let result = service.convert(submission.file()).await;
        Some(self.finish_submission(submission, result))
    }

    pub fn set_preview_text(&mut self, text: String) {
        self.preview_text = text;
    }

    /// True once per successful conversion.
    pub fn take_pending_download(&mut self) -> bool {
        std::mem::take(&mut self.pending_download)
    }

    pub fn state(&self) -> SessionState {
        if self.in_flight.is_some() {
            SessionState::Converting
        } else if self.selected.is_none() {
            SessionState::Idle
        } else if self.converted.is_some() {
            SessionState::Converted
        } else if self.error.is_some() {
            SessionState::Failed
        } else {
            SessionState::FileSelected
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn selected(&self) -> Option<&SelectedFont> {
        self.selected.as_ref()
    }

    pub fn converted(&self) -> Option<&ConvertedFont> {
        self.converted.as_ref()
    }

    pub fn verification(&self) -> Option<&VerificationResult> {
        self.verification.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn preview_text(&self) -> &str {
        &self.preview_text
    }
}

impl Default for ConverterSession {
    fn default() -> Self {
        Self::new(ObjectUrlRegistry::new())
    }
}
