use eframe::egui;

/// Renders the question row. Returns the text to send when the user submits;
/// the field is cleared only once the exchange succeeds, not here.
pub fn render(
    ui: &mut egui::Ui,
    input_text: &mut String,
    can_type: bool,
    can_send: bool,
) -> Option<String> {
    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.add_enabled(
            can_type,
            egui::TextEdit::singleline(input_text)
                .hint_text("Ask about the PDF")
                .desired_width(ui.available_width() - 60.0),
        );
        if ui.add_enabled(can_send, egui::Button::new("Send")).clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
        }
    });

    if send && can_send {
        return Some(input_text.clone());
    }

    None
}
