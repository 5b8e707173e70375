use eframe::egui;

/// Renders the file selector row, disabled while an upload is in flight.
/// Returns the selection when the user asks to upload it.
pub fn render(ui: &mut egui::Ui, file_path_input: &mut String, uploading: bool) -> Option<String> {
    let mut upload = false;
    ui.horizontal(|ui| {
        ui.label("PDF file:");
        ui.add_enabled(
            !uploading,
            egui::TextEdit::singleline(file_path_input).hint_text("path/to/document.pdf"),
        );
        if ui
            .add_enabled(!uploading, egui::Button::new("Upload"))
            .clicked()
        {
            upload = true;
        }

        if uploading {
            ui.spinner();
        }
    });

    upload.then(|| file_path_input.clone())
}
