use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent};

use super::components::{alert, chat_area, input_bar, upload_bar};
use super::state::{AppState, validate_selection};

pub struct ChatApp {
    state: AppState,
    command_sender: mpsc::Sender<ApiCommand>,
    event_receiver: mpsc::Receiver<ApiEvent>,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        command_sender: mpsc::Sender<ApiCommand>,
        event_receiver: mpsc::Receiver<ApiEvent>,
    ) -> Self {
        Self {
            state: AppState::new(),
            command_sender,
            event_receiver,
        }
    }

    fn handle_api_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.apply(event);
        }
    }

    fn request_upload(&mut self, selection: &str) {
        match validate_selection(selection) {
            Ok(path) => {
                self.state.upload_started();
                self.send_command(ApiCommand::UploadFile { path });
            }
            Err(reason) => self.state.show_alert(reason),
        }
    }

    fn request_chat(&mut self, message: String) {
        let Some(file_id) = self.state.file_id.clone() else {
            self.state.show_alert("Please upload a PDF file first.");
            return;
        };
        self.send_command(ApiCommand::SendChat { file_id, message });
    }

    fn send_command(&mut self, command: ApiCommand) {
        if let Err(err) = self.command_sender.try_send(command) {
            log::warn!("Failed to send command to API worker: {err}");
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_api_events();

        egui::TopBottomPanel::bottom("input_bar").show(ctx, |ui| {
            let can_type = self.state.file_id.is_some();
            let can_send = self.state.can_send();
            if let Some(message) =
                input_bar::render(ui, &mut self.state.input_text, can_type, can_send)
            {
                self.request_chat(message);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("PDF Chat");
            ui.separator();
            if let Some(selection) =
                upload_bar::render(ui, &mut self.state.file_path_input, self.state.file_loading)
            {
                self.request_upload(&selection);
            }

            ui.separator();
            chat_area::render(ui, &self.state.messages);
        });

        alert::render(ctx, &mut self.state.alert);

        ctx.request_repaint();
    }
}
