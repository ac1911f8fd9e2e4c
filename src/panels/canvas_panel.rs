use crate::app::TransparenterApp;
use crate::ops;
use crate::panels::menu_bar::{edit_menu_items, tool_menu_items};

fn uv_full() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}

/// The image view: draws the current bitmap 1:1 and centered, routes pointer
/// gestures to the active tool mode, and overlays the magnifier loupe.
pub fn canvas_panel(app: &mut TransparenterApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let panel_rect = response.rect;

        let texture_info = app
            .document
            .texture(ctx)
            .map(|texture| (texture.id(), texture.size_vec2()));
        let Some((texture_id, image_size)) = texture_info else {
            painter.text(
                panel_rect.center(),
                egui::Align2::CENTER_CENTER,
                "Import an image to get started (File ▸ Import Image)",
                egui::FontId::proportional(16.0),
                ui.visuals().weak_text_color(),
            );
            return;
        };

        let image_rect = egui::Rect::from_center_size(panel_rect.center(), image_size);
        painter.image(texture_id, image_rect, uv_full(), egui::Color32::WHITE);

        // Screen position to image pixel coordinates, 1:1 scale.
        let to_image = |pos: egui::Pos2| -> Option<(f32, f32)> {
            let x = pos.x - image_rect.min.x;
            let y = pos.y - image_rect.min.y;
            (x >= 0.0 && y >= 0.0 && x < image_size.x && y < image_size.y).then_some((x, y))
        };

        if let Some(hover) = response.hover_pos() {
            if to_image(hover).is_some() {
                if app.tools.color_removal.is_some() {
                    ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
                } else if app.tools.eraser_active {
                    // Replace the cursor with an outline of the eraser tip.
                    ctx.set_cursor_icon(egui::CursorIcon::None);
                    painter.circle_stroke(
                        hover,
                        app.tools.eraser_size as f32 / 2.0,
                        egui::Stroke::new(1.0, ui.visuals().strong_text_color()),
                    );
                }
            }
        }

        if app.tools.eraser_active {
            if response.drag_started() {
                if let Some(pos) = response.interact_pointer_pos().and_then(to_image) {
                    app.begin_stroke(pos);
                }
            } else if response.dragged() {
                // Keep following the pointer even slightly outside the image;
                // the stroke clamps to the bitmap bounds.
                if let Some(pos) = response.interact_pointer_pos() {
                    app.continue_stroke((pos.x - image_rect.min.x, pos.y - image_rect.min.y));
                }
            }
            if response.drag_stopped() {
                app.end_stroke();
            }
        }

        if response.clicked() && app.tools.color_removal.is_some() {
            if let Some((x, y)) = response.interact_pointer_pos().and_then(to_image) {
                app.apply_color_removal(x as u32, y as u32);
            }
        }

        if app.tools.magnifier_active {
            if let Some(hover) = response.hover_pos() {
                if let Some((x, y)) = to_image(hover) {
                    draw_loupe(app, ctx, hover, (x as u32, y as u32));
                }
            }
        }

        // Right-click mirrors the Tool menu, like the original popup menu.
        response.context_menu(|ui| {
            tool_menu_items(app, ui);
            ui.separator();
            edit_menu_items(app, ui);
        });
    });
}

/// Crop-and-upscale loupe next to the pointer, painted above everything else.
fn draw_loupe(
    app: &mut TransparenterApp,
    ctx: &egui::Context,
    pointer: egui::Pos2,
    image_pos: (u32, u32),
) {
    let radius = app.tools.magnifier_radius;
    let Some(view) = app
        .document
        .image()
        .and_then(|img| ops::magnifier::magnified_view(img, image_pos.0, image_pos.1, radius))
    else {
        return;
    };

    let size = [view.width() as usize, view.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, view.as_raw());
    if let Some(texture) = &mut app.loupe_texture {
        texture.set(color_image, egui::TextureOptions::LINEAR);
    } else {
        app.loupe_texture = Some(ctx.load_texture("loupe", color_image, egui::TextureOptions::LINEAR));
    }
    let Some(texture) = &app.loupe_texture else {
        return;
    };

    let side = (radius * 3) as f32;
    let offset = radius as f32 + 10.0;
    let rect = egui::Rect::from_min_size(
        pointer + egui::vec2(offset, offset),
        egui::vec2(side, side),
    );
    let fg = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("magnifier_loupe"),
    ));
    fg.image(texture.id(), rect, uv_full(), egui::Color32::WHITE);
    fg.rect_stroke(rect, 2.0, egui::Stroke::new(1.0, egui::Color32::GRAY));
}
