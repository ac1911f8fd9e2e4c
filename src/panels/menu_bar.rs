use crate::app::TransparenterApp;
use crate::tool::RemovalMode;

pub fn menu_bar(app: &mut TransparenterApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Import Image").clicked() {
                    app.import_image();
                    ui.close_menu();
                }
                if ui.button("Save As…").clicked() {
                    app.save_image_as();
                    ui.close_menu();
                }
                ui.separator();
                if ui.button("Exit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Edit", |ui| {
                edit_menu_items(app, ui);
            });

            ui.menu_button("Tool", |ui| {
                tool_menu_items(app, ui);
            });
        });
    });
}

/// Undo/Redo entries, shared between the Edit menu and the canvas context
/// menu.
pub(crate) fn edit_menu_items(app: &mut TransparenterApp, ui: &mut egui::Ui) {
    if ui
        .add_enabled(app.history.can_undo(), egui::Button::new("Undo"))
        .clicked()
    {
        app.undo();
        ui.close_menu();
    }
    if ui
        .add_enabled(app.history.can_redo(), egui::Button::new("Redo"))
        .clicked()
    {
        app.redo();
        ui.close_menu();
    }
}

/// The Tool menu, shared verbatim with the canvas context menu.
pub(crate) fn tool_menu_items(app: &mut TransparenterApp, ui: &mut egui::Ui) {
    if ui.button("Remove Background").clicked() {
        app.remove_background();
        ui.close_menu();
    }

    ui.menu_button("Erase", |ui| {
        if ui.button("Activate Manual Erase").clicked() {
            app.activate_manual_erase();
            ui.close_menu();
        }
        if ui.button("Deactivate Manual Erase").clicked() {
            app.deactivate_manual_erase();
            ui.close_menu();
        }
        ui.separator();
        if ui
            .add_enabled(app.tools.eraser_active, egui::Button::new("Eraser Size…"))
            .clicked()
        {
            app.show_eraser_size = true;
            ui.close_menu();
        }
    });

    if ui.button("Toggle Magnifier").clicked() {
        app.toggle_magnifier();
        ui.close_menu();
    }
    ui.separator();

    if ui.button("Remove Lighter Colors").clicked() {
        app.set_removal_mode(RemovalMode::Lighter);
        ui.close_menu();
    }
    if ui.button("Remove Darker Colors").clicked() {
        app.set_removal_mode(RemovalMode::Darker);
        ui.close_menu();
    }
}
