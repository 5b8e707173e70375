use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Success body of `POST /api/upload`.
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    #[serde(rename = "fileId")]
    pub file_id: String,
}

/// Request body of `POST /api/chat`. Only the current turn is sent; the
/// server keeps whatever context it wants under the file identifier.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    #[serde(rename = "fileId")]
    pub file_id: &'a str,
    pub message: &'a str,
}

/// Success body of `POST /api/chat`.
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

/// Failure body shared by both endpoints.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

/// Failures a request flow can surface. Everything here is logged and rolled
/// back; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx status with the server's `message` body (or the raw body text
    /// when it does not decode).
    #[error("server returned {status}: {message}")]
    Server {
        status: reqwest::StatusCode,
        message: String,
    },
    /// Transport failure or an undecodable success body.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The selected file could not be read.
    #[error("could not read {}: {source}", path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },
}
