use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{ImageFormat, Rgba, RgbaImage};

use crate::error::EditorError;

/// Imports larger than this are shrunk (aspect preserved) until they fit.
pub const MAX_IMPORT_SIZE: u32 = 720;

const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "webp"];

/// The single mutable bitmap slot plus its on-screen texture.
///
/// At most one bitmap is current at a time; edits replace it wholesale. The
/// texture is re-uploaded lazily whenever the bitmap changed since the last
/// frame.
#[derive(Default)]
pub struct Document {
    image: Option<RgbaImage>,
    source_path: Option<PathBuf>,
    texture: Option<egui::TextureHandle>,
    texture_dirty: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a picked file into the current slot, converting to RGBA and
    /// shrinking oversized inputs to fit [`MAX_IMPORT_SIZE`]. On any failure
    /// the previous image stays current.
    pub fn import(&mut self, path: &Path) -> Result<(), EditorError> {
        let supported = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()));
        if !supported {
            return Err(EditorError::UnsupportedFormat(path.to_path_buf()));
        }

        let decoded = image::open(path)?;
        let decoded = if decoded.width() > MAX_IMPORT_SIZE || decoded.height() > MAX_IMPORT_SIZE {
            decoded.resize(MAX_IMPORT_SIZE, MAX_IMPORT_SIZE, FilterType::Lanczos3)
        } else {
            decoded
        };

        log::info!(
            "imported {} ({}x{})",
            path.display(),
            decoded.width(),
            decoded.height()
        );
        self.image = Some(decoded.to_rgba8());
        self.source_path = Some(path.to_path_buf());
        self.texture_dirty = true;
        Ok(())
    }

    /// Encode the current bitmap as PNG, regardless of the path's extension.
    pub fn save_png(&self, path: &Path) -> Result<(), EditorError> {
        let image = self.image.as_ref().ok_or(EditorError::NoImage)?;
        image.save_with_format(path, ImageFormat::Png)?;
        log::info!("saved {}", path.display());
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    /// Mutable access for an edit; marks the texture stale.
    pub fn image_mut(&mut self) -> Option<&mut RgbaImage> {
        self.texture_dirty = true;
        self.image.as_mut()
    }

    /// A full copy of the current bitmap, for history snapshots.
    pub fn snapshot(&self) -> Option<RgbaImage> {
        self.image.clone()
    }

    /// Replace the current bitmap wholesale (undo/redo, background removal).
    pub fn replace(&mut self, image: RgbaImage) {
        self.image = Some(image);
        self.texture_dirty = true;
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        let image = self.image.as_ref()?;
        if x < image.width() && y < image.height() {
            Some(*image.get_pixel(x, y))
        } else {
            None
        }
    }

    /// Upload the bitmap to the GPU if it changed, and hand out the texture.
    pub fn texture(&mut self, ctx: &egui::Context) -> Option<&egui::TextureHandle> {
        if self.texture_dirty {
            if let Some(image) = &self.image {
                let size = [image.width() as usize, image.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
                if let Some(texture) = &mut self.texture {
                    texture.set(color_image, egui::TextureOptions::NEAREST);
                } else {
                    self.texture = Some(ctx.load_texture(
                        "document",
                        color_image,
                        egui::TextureOptions::NEAREST,
                    ));
                }
            } else {
                self.texture = None;
            }
            self.texture_dirty = false;
        }
        self.texture.as_ref()
    }
}
