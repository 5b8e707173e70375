use std::path::Path;

use reqwest::multipart;
use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent, PDF_MIME};

use super::api::{ApiError, ApiErrorBody, ChatRequest, ChatResponse, UploadResponse};

/// HTTP client for the two request flows against the PDF chat server.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    server_url: String,
}

impl ApiClient {
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            server_url,
        }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Uploads one PDF and returns the identifier the server will accept
    /// chat questions under.
    pub async fn upload_file(&self, path: &Path) -> Result<String, ApiError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ApiError::File {
                path: path.to_path_buf(),
                source,
            })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document.pdf".to_string());
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(PDF_MIME)?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}/api/upload", self.server_url))
            .multipart(form)
            .send()
            .await?;

        let body: UploadResponse = check_status(response).await?.json().await?;
        Ok(body.file_id)
    }

    /// Asks one question about an already-uploaded document and returns the
    /// answer text.
    pub async fn send_chat(&self, file_id: &str, message: &str) -> Result<String, ApiError> {
        let response = self
            .http
            .post(format!("{}/api/chat", self.server_url))
            .json(&ChatRequest { file_id, message })
            .send()
            .await?;

        let body: ChatResponse = check_status(response).await?.json().await?;
        Ok(body.answer)
    }
}

/// Turns a non-2xx response into `ApiError::Server`, pulling the server's
/// `message` field out of the body when it decodes.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&text)
        .map(|body| body.message)
        .unwrap_or(text);
    Err(ApiError::Server { status, message })
}

/// Bridges the UI channels to the HTTP client.
pub struct ApiWorker {
    client: ApiClient,
    event_sender: mpsc::Sender<ApiEvent>,
    command_receiver: mpsc::Receiver<ApiCommand>,
}

impl ApiWorker {
    pub fn new(
        client: ApiClient,
        event_sender: mpsc::Sender<ApiEvent>,
        command_receiver: mpsc::Receiver<ApiCommand>,
    ) -> Self {
        Self {
            client,
            event_sender,
            command_receiver,
        }
    }

    /// Command loop. Each request runs on its own task: an in-flight upload
    /// must not delay a chat send, and chat sends may overlap.
    pub async fn run(mut self) {
        log::info!("API worker started against {}", self.client.server_url());

        while let Some(command) = self.command_receiver.recv().await {
            let client = self.client.clone();
            let events = self.event_sender.clone();
            tokio::spawn(async move {
                let event = handle_command(&client, command).await;
                if let Err(err) = events.send(event).await {
                    log::warn!("Failed to send event to UI: {err}");
                }
            });
        }

        log::info!("Command channel closed, API worker stopping");
    }
}

async fn handle_command(client: &ApiClient, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::UploadFile { path } => match client.upload_file(&path).await {
            Ok(file_id) => ApiEvent::UploadCompleted { file_id },
            Err(err) => ApiEvent::UploadFailed {
                error: err.to_string(),
            },
        },
        ApiCommand::SendChat { file_id, message } => {
            match client.send_chat(&file_id, &message).await {
                Ok(answer) => ApiEvent::ChatCompleted {
                    question: message,
                    answer,
                },
                Err(err) => ApiEvent::ChatFailed {
                    error: err.to_string(),
                },
            }
        }
    }
}
