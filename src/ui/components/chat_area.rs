use eframe::egui;

use crate::common::{ChatMessage, Role};

// Bubble fills per role; user turns sit on the right, assistant on the left.
const USER_FILL: egui::Color32 = egui::Color32::from_gray(60);
const ASSISTANT_FILL: egui::Color32 = egui::Color32::from_gray(45);

pub fn render(ui: &mut egui::Ui, messages: &[ChatMessage]) {
    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                let (layout, fill) = match message.role {
                    Role::User => (egui::Layout::right_to_left(egui::Align::Min), USER_FILL),
                    Role::Assistant => {
                        (egui::Layout::left_to_right(egui::Align::Min), ASSISTANT_FILL)
                    }
                };

                ui.with_layout(layout, |ui| {
                    egui::Frame::new()
                        .fill(fill)
                        .corner_radius(5)
                        .inner_margin(10)
                        .outer_margin(egui::Margin::symmetric(0, 5))
                        .show(ui, |ui| {
                            ui.set_max_width(ui.available_width() * 0.8);
                            ui.label(&message.text);
                        });
                });
            }
        });
}
