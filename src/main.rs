use clap::Parser;
use dotenvy::dotenv;
use tokio::sync::mpsc;

use pdf_chat::config;
use pdf_chat::network::{ApiClient, ApiWorker};
use pdf_chat::ui::ChatApp;

#[derive(Parser)]
#[command(name = "pdf_chat", version, about = "Chat with an uploaded PDF")]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Override the upload/chat server origin
    #[arg(long, value_name = "URL")]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let app_config = config::load_config(&cli.config);
    let server_url = cli.server.unwrap_or(app_config.server_url);

    run_client(server_url).await
}

async fn run_client(server_url: String) -> Result<(), eframe::Error> {
    // UI -> network
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Network -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // Network worker runs in the background; the UI owns the main thread.
    let client = ApiClient::new(server_url.clone());
    tokio::spawn(ApiWorker::new(client, event_tx, cmd_rx).run());

    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);

    eframe::run_native(
        "PDF Chat",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .expect("ChatApp should only be initialized once");

            log::info!("Client started against {server_url}");

            Ok(Box::new(ChatApp::new(cc, cmd_tx.clone(), event_receiver)))
        }),
    )
}
