use eframe::egui;

/// Modal notice in the browser `alert()` sense: the rest of the UI stays
/// blocked until it is dismissed.
pub fn render(ctx: &egui::Context, alert: &mut Option<String>) {
    let Some(text) = alert.clone() else { return };

    let modal = egui::Modal::new(egui::Id::new("alert")).show(ctx, |ui| {
        ui.set_max_width(320.0);
        ui.label(text);
        ui.separator();
        ui.vertical_centered(|ui| ui.button("OK").clicked()).inner
    });

    if modal.inner || modal.should_close() {
        *alert = None;
    }
}
