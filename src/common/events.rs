/// Events from the API worker back up to the UI.
#[derive(Debug, Clone)]
pub enum ApiEvent {
    UploadCompleted { file_id: String },
    UploadFailed { error: String },
    /// Carries both halves of the exchange so the UI appends them in one
    /// state update, question first.
    ChatCompleted { question: String, answer: String },
    ChatFailed { error: String },
}
