use crate::document::Document;
use crate::error::EditorError;
use crate::history::SnapshotHistory;
use crate::ops;
use crate::panels;
use crate::segmentation::{self, BorderFloodSegmenter, Segmenter};
use crate::tool::{RemovalMode, ToolState};

/// A pending dialog shown as a blocking modal window.
pub struct Notice {
    pub title: &'static str,
    pub text: String,
}

/// The whole application state: the document, the two history stacks, the
/// transient tool modes and the status line. Every menu item, shortcut and
/// pointer gesture dispatches into one of the action methods below.
pub struct TransparenterApp {
    pub(crate) document: Document,
    pub(crate) history: SnapshotHistory,
    pub(crate) tools: ToolState,
    segmenter: Box<dyn Segmenter>,
    pub(crate) status: String,
    pub(crate) notice: Option<Notice>,
    /// Previous pointer position of an in-progress erase drag, in image
    /// coordinates.
    pub(crate) stroke_anchor: Option<(f32, f32)>,
    pub(crate) loupe_texture: Option<egui::TextureHandle>,
    pub(crate) show_eraser_size: bool,
}

impl TransparenterApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        log::info!("starting editor");
        Self {
            document: Document::new(),
            history: SnapshotHistory::new(),
            tools: ToolState::default(),
            segmenter: Box::new(BorderFloodSegmenter::default()),
            status: "Ready".to_owned(),
            notice: None,
            stroke_anchor: None,
            loupe_texture: None,
            show_eraser_size: false,
        }
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
    }

    pub(crate) fn notify_error(&mut self, error: &EditorError) {
        log::error!("{error}");
        self.notice = Some(Notice {
            title: "Error",
            text: error.to_string(),
        });
    }

    pub(crate) fn notify_info(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            title: "Info",
            text: text.into(),
        });
    }

    /// True when an action that needs a bitmap may proceed; otherwise pops the
    /// missing-image error dialog.
    fn require_image(&mut self) -> bool {
        if self.document.is_loaded() {
            true
        } else {
            self.notify_error(&EditorError::NoImage);
            false
        }
    }

    // --- File -----------------------------------------------------------

    /// Pick and decode a new input image. Both history stacks are cleared,
    /// but only once a new bitmap actually loaded; a cancelled picker or a
    /// failed decode leaves everything as it was.
    pub fn import_image(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter(
                "Image files",
                &["jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "webp"],
            )
            .pick_file()
        else {
            return;
        };

        match self.document.import(&path) {
            Ok(()) => {
                self.history.clear();
                self.tools.color_removal = None;
                self.stroke_anchor = None;
                self.set_status("Image uploaded");
            }
            Err(err) => self.notify_error(&err),
        }
    }

    /// Save the current bitmap as a transparent PNG via a save dialog.
    pub fn save_image_as(&mut self) {
        if !self.require_image() {
            return;
        }
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG files", &["png"])
            .set_file_name("output.png")
            .save_file()
        else {
            return;
        };

        match self.document.save_png(&path) {
            Ok(()) => {
                self.notify_info("Processed image saved successfully.");
                self.set_status("Image saved");
            }
            Err(err) => self.notify_error(&err),
        }
    }

    // --- Edits ------------------------------------------------------------

    /// Run the segmentation backend over the current bitmap and zero the
    /// alpha of everything it calls background. Blocks the UI thread for its
    /// duration.
    pub fn remove_background(&mut self) {
        let Some(snapshot) = self.document.snapshot() else {
            self.notify_error(&EditorError::NoImage);
            return;
        };

        self.set_status("Removing image background in progress");
        log::info!("removing background with {}", self.segmenter.name());

        let mask = match self.segmenter.segment(&snapshot) {
            Ok(mask) => mask,
            Err(err) => {
                self.notify_error(&EditorError::Segmentation(err.to_string()));
                self.set_status("Ready");
                return;
            }
        };

        self.history.push_snapshot(snapshot);
        if let Some(image) = self.document.image_mut() {
            segmentation::apply_mask(image, &mask);
        }
        self.set_status("Image background removed");
    }

    pub fn undo(&mut self) {
        let undone = match self.document.image_mut() {
            Some(image) => self.history.undo(image),
            None => false,
        };
        if undone {
            self.set_status("Undo action performed");
        } else {
            self.notify_info("Nothing to undo.");
            self.set_status("Ready");
        }
    }

    pub fn redo(&mut self) {
        let redone = match self.document.image_mut() {
            Some(image) => self.history.redo(image),
            None => false,
        };
        if redone {
            self.set_status("Redo action performed");
        } else {
            self.notify_info("Nothing to redo.");
            self.set_status("Ready");
        }
    }

    // --- Manual erase -----------------------------------------------------

    pub fn activate_manual_erase(&mut self) {
        if !self.require_image() {
            return;
        }
        self.tools.eraser_active = true;
        self.show_eraser_size = true;
        self.set_status("Eraser on (click and drag on the image to erase)");
    }

    pub fn deactivate_manual_erase(&mut self) {
        if !self.require_image() {
            return;
        }
        self.tools.eraser_active = false;
        self.show_eraser_size = false;
        self.stroke_anchor = None;
        self.set_status("Eraser off");
    }

    /// First pointer press of an erase drag: snapshot once, remember where the
    /// stroke starts.
    pub fn begin_stroke(&mut self, pos: (f32, f32)) {
        if !self.tools.eraser_active {
            return;
        }
        if let Some(snapshot) = self.document.snapshot() {
            self.history.push_snapshot(snapshot);
            self.stroke_anchor = Some(pos);
        }
    }

    /// Pointer moved during an erase drag: clear a stroke segment from the
    /// previous position to this one.
    pub fn continue_stroke(&mut self, pos: (f32, f32)) {
        let Some(anchor) = self.stroke_anchor else {
            return;
        };
        let width = self.tools.eraser_size;
        if let Some(image) = self.document.image_mut() {
            ops::erase::erase_segment(image, anchor, pos, width);
        }
        self.stroke_anchor = Some(pos);
    }

    pub fn end_stroke(&mut self) {
        self.stroke_anchor = None;
    }

    // --- Magnifier ----------------------------------------------------------

    pub fn toggle_magnifier(&mut self) {
        if !self.require_image() {
            return;
        }
        self.tools.magnifier_active = !self.tools.magnifier_active;
        self.set_status(if self.tools.magnifier_active {
            "Magnifier activated"
        } else {
            "Magnifier deactivated"
        });
    }

    // --- Threshold color removal -------------------------------------------

    /// Arm lighter/darker removal; the next click on the image picks the
    /// reference color.
    pub fn set_removal_mode(&mut self, mode: RemovalMode) {
        if !self.require_image() {
            return;
        }
        self.tools.color_removal = Some(mode);
        self.set_status(format!(
            "Remove {} colors armed: click an image pixel to pick the threshold color",
            mode.label()
        ));
    }

    /// Consume the armed removal mode using the clicked pixel as reference.
    pub fn apply_color_removal(&mut self, x: u32, y: u32) {
        let Some(mode) = self.tools.color_removal.take() else {
            return;
        };
        let Some(reference) = self.document.pixel(x, y) else {
            return;
        };
        let Some(snapshot) = self.document.snapshot() else {
            return;
        };

        self.history.push_snapshot(snapshot);
        let cleared = match self.document.image_mut() {
            Some(image) => match mode {
                RemovalMode::Lighter => ops::threshold::remove_lighter(image, reference),
                RemovalMode::Darker => ops::threshold::remove_darker(image, reference),
            },
            None => 0,
        };
        log::info!(
            "removed {} {} pixels against reference {:?}",
            cleared,
            mode.label(),
            reference
        );
        self.set_status(format!("Color removed ({cleared} pixels)"));
    }

    // --- Frame plumbing -------------------------------------------------------

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        let (undo, redo, save) = ctx.input_mut(|i| {
            (
                i.consume_key(egui::Modifiers::CTRL, egui::Key::Z),
                i.consume_key(egui::Modifiers::CTRL, egui::Key::Y),
                i.consume_key(egui::Modifiers::CTRL, egui::Key::S),
            )
        });
        if undo {
            self.undo();
        }
        if redo {
            self.redo();
        }
        if save {
            self.save_image_as();
        }
    }

    /// Blocking dialog for errors and informational messages; the rest of the
    /// state is left exactly as it was.
    fn show_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(notice.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(&notice.text);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.notice = None;
        }
    }

    fn show_eraser_size_window(&mut self, ctx: &egui::Context) {
        if !(self.show_eraser_size && self.tools.eraser_active) {
            return;
        }
        let mut size = self.tools.eraser_size;
        egui::Window::new("Eraser Size")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add(egui::Slider::new(&mut size, ToolState::ERASER_RANGE).text("px"));
                if ui.button("Close").clicked() {
                    self.show_eraser_size = false;
                }
            });
        if size != self.tools.eraser_size && self.tools.set_eraser_size(size) {
            self.set_status(format!("Eraser size changed (Size: {size})"));
        }
    }
}

impl eframe::App for TransparenterApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        panels::menu_bar(self, ctx);
        panels::status_bar(self, ctx);
        panels::canvas_panel(self, ctx);

        self.show_eraser_size_window(ctx);
        self.show_notice(ctx);
    }
}
