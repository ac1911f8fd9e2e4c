use crate::app::TransparenterApp;

pub fn status_bar(app: &mut TransparenterApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(&app.status);
            if let Some(image) = app.document.image() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("{} × {}", image.width(), image.height()));
                });
            }
        });
    });
}
