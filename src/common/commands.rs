use std::path::PathBuf;

/// Commands the UI sends down to the API worker.
#[derive(Debug, Clone)]
pub enum ApiCommand {
    /// Upload the selected PDF so the server can parse and index it.
    UploadFile { path: PathBuf },
    /// Ask one question about the document behind `file_id`.
    SendChat { file_id: String, message: String },
}
