use std::path::PathBuf;

use crate::common::{ApiEvent, ChatMessage, PDF_MIME};

/// Local UI state. Mutated only from the UI thread, one event or user
/// action at a time.
pub struct AppState {
    pub messages: Vec<ChatMessage>,
    pub input_text: String,
    pub file_path_input: String,
    pub file_id: Option<String>,
    pub file_loading: bool,
    pub alert: Option<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            input_text: String::new(),
            file_path_input: String::new(),
            file_id: None,
            file_loading: false,
            alert: None,
        }
    }

    /// Send is usable only with an uploaded document and a non-blank question.
    pub fn can_send(&self) -> bool {
        self.file_id.is_some() && !self.input_text.trim().is_empty()
    }

    pub fn show_alert(&mut self, text: impl Into<String>) {
        self.alert = Some(text.into());
    }

    pub fn upload_started(&mut self) {
        self.file_loading = true;
    }

    /// Applies one worker event as a single atomic state update.
    pub fn apply(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::UploadCompleted { file_id } => {
                self.file_id = Some(file_id);
                self.file_loading = false;
                self.show_alert("File uploaded and processed successfully!");
            }
            ApiEvent::UploadFailed { error } => {
                // Whatever identifier was held before is unusable now.
                self.file_id = None;
                self.file_loading = false;
                log::error!("Error processing file: {error}");
            }
            ApiEvent::ChatCompleted { question, answer } => {
                self.messages.push(ChatMessage::user(question));
                self.messages.push(ChatMessage::assistant(answer));
                self.input_text.clear();
            }
            ApiEvent::ChatFailed { error } => {
                // The typed question stays in place so the user can retry.
                log::error!("Error fetching chat response: {error}");
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Gate run before any upload command goes out: something must be selected
/// and its declared media type must be PDF. No content sniffing.
pub fn validate_selection(raw: &str) -> Result<PathBuf, &'static str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Please select a file.");
    }

    let mime = mime_guess::from_path(trimmed).first_or_octet_stream();
    if mime.essence_str() != PDF_MIME {
        return Err("Please upload a valid PDF file.");
    }

    Ok(PathBuf::from(trimmed))
}
