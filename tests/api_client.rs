use std::io::Write;

use pdf_chat::common::{ApiCommand, ApiEvent};
use pdf_chat::network::api::ApiError;
use pdf_chat::network::{ApiClient, ApiWorker};
use serde_json::json;
use tokio::sync::mpsc;
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn write_test_pdf() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("report")
        .suffix(".pdf")
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(b"%PDF-1.4\ntest content")
        .expect("Failed to write temp file");
    file
}

#[tokio::test]
async fn upload_success_returns_file_id() {
    let mock_server = MockServer::start().await;

    // The upload must arrive as a multipart form with a single `file` part.
    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .and(body_string_contains("name=\"file\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "fileId": "abc123" })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let pdf = write_test_pdf();
    let client = ApiClient::new(mock_server.uri());

    let file_id = client
        .upload_file(pdf.path())
        .await
        .expect("upload should succeed");
    assert_eq!(file_id, "abc123");
}

#[tokio::test]
async fn upload_server_failure_carries_status_and_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "parse error" })))
        .mount(&mock_server)
        .await;

    let pdf = write_test_pdf();
    let client = ApiClient::new(mock_server.uri());

    match client.upload_file(pdf.path()).await {
        Err(ApiError::Server { status, message }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(message, "parse error");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn upload_failure_with_undecodable_body_keeps_raw_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&mock_server)
        .await;

    let pdf = write_test_pdf();
    let client = ApiClient::new(mock_server.uri());

    match client.upload_file(pdf.path()).await {
        Err(ApiError::Server { status, message }) => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(message, "bad gateway");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn upload_of_unreadable_file_never_hits_the_network() {
    let mock_server = MockServer::start().await;

    let client = ApiClient::new(mock_server.uri());

    match client
        .upload_file(std::path::Path::new("does-not-exist.pdf"))
        .await
    {
        Err(ApiError::File { path, .. }) => {
            assert_eq!(path, std::path::PathBuf::from("does-not-exist.pdf"));
        }
        other => panic!("expected file error, got {other:?}"),
    }

    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn chat_success_returns_answer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_json(json!({
            "fileId": "abc123",
            "message": "What is the summary?"
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "answer": "It is a quarterly report." })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());

    let answer = client
        .send_chat("abc123", "What is the summary?")
        .await
        .expect("chat should succeed");
    assert_eq!(answer, "It is a quarterly report.");
}

#[tokio::test]
async fn chat_server_failure_carries_status_and_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "unknown file" })),
        )
        .mount(&mock_server)
        .await;

    let client = ApiClient::new(mock_server.uri());

    match client.send_chat("missing", "hello").await {
        Err(ApiError::Server { status, message }) => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "unknown file");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn worker_turns_commands_into_events() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/upload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "fileId": "abc123" })))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "answer": "It is a quarterly report." })),
        )
        .mount(&mock_server)
        .await;

    let (cmd_tx, cmd_rx) = mpsc::channel(8);
    let (event_tx, mut event_rx) = mpsc::channel(8);
    tokio::spawn(ApiWorker::new(ApiClient::new(mock_server.uri()), event_tx, cmd_rx).run());

    let pdf = write_test_pdf();
    cmd_tx
        .send(ApiCommand::UploadFile {
            path: pdf.path().to_path_buf(),
        })
        .await
        .unwrap();
    match event_rx.recv().await.unwrap() {
        ApiEvent::UploadCompleted { file_id } => assert_eq!(file_id, "abc123"),
        other => panic!("unexpected event: {other:?}"),
    }

    cmd_tx
        .send(ApiCommand::SendChat {
            file_id: "abc123".to_string(),
            message: "What is the summary?".to_string(),
        })
        .await
        .unwrap();
    match event_rx.recv().await.unwrap() {
        ApiEvent::ChatCompleted { question, answer } => {
            assert_eq!(question, "What is the summary?");
            assert_eq!(answer, "It is a quarterly report.");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn worker_reports_chat_failures_as_events() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "context missing" })),
        )
        .mount(&mock_server)
        .await;

    let (cmd_tx, cmd_rx) = mpsc::channel(8);
    let (event_tx, mut event_rx) = mpsc::channel(8);
    tokio::spawn(ApiWorker::new(ApiClient::new(mock_server.uri()), event_tx, cmd_rx).run());

    cmd_tx
        .send(ApiCommand::SendChat {
            file_id: "abc123".to_string(),
            message: "What is the summary?".to_string(),
        })
        .await
        .unwrap();

    match event_rx.recv().await.unwrap() {
        ApiEvent::ChatFailed { error } => assert!(error.contains("context missing")),
        other => panic!("unexpected event: {other:?}"),
    }
}
