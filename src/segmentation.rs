//! Background segmentation seam.
//!
//! The editor never inspects how a backend decides what is background; it hands
//! the current bitmap to a [`Segmenter`] and applies the returned mask. The
//! built-in backend is a border-seeded flood fill; a model-based backend can be
//! dropped in behind the same trait.

use std::collections::VecDeque;

use image::{GrayImage, Luma, RgbaImage};
use thiserror::Error;

/// Mask value for pixels the segmenter keeps.
pub const FOREGROUND: Luma<u8> = Luma([255]);
/// Mask value for pixels the segmenter drops.
pub const BACKGROUND: Luma<u8> = Luma([0]);

#[derive(Debug, Error)]
pub enum SegmentationError {
    #[error("image is empty")]
    EmptyImage,
    #[error("{0}")]
    Backend(String),
}

/// A background-removal routine. Produces a foreground mask with the same
/// dimensions as the input; the caller applies it.
pub trait Segmenter {
    fn name(&self) -> &'static str;

    fn segment(&self, image: &RgbaImage) -> Result<GrayImage, SegmentationError>;
}

/// Zero the alpha of every pixel the mask marks as background. RGB channels
/// are left in place so an undo-free inspection still shows the removed color.
pub fn apply_mask(image: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(image.dimensions(), mask.dimensions());
    for (pixel, mask_px) in image.pixels_mut().zip(mask.pixels()) {
        if mask_px[0] == 0 {
            pixel[3] = 0;
        }
    }
}

/// Built-in segmentation backend: estimate the background color from the
/// bitmap border, then flood-fill inward from every border pixel within a
/// color tolerance. Whatever the fill reaches is background; everything else,
/// including holes enclosed by the subject, stays foreground.
pub struct BorderFloodSegmenter {
    /// Maximum per-pass color distance (0-255 scale) to the estimated
    /// background color.
    pub tolerance: f32,
}

impl Default for BorderFloodSegmenter {
    fn default() -> Self {
        Self { tolerance: 30.0 }
    }
}

impl BorderFloodSegmenter {
    /// Mean RGB of the border ring, the flood fill's reference color.
    fn border_color(image: &RgbaImage) -> [f32; 3] {
        let (w, h) = (image.width(), image.height());
        let mut sum = [0.0f64; 3];
        let mut count = 0.0f64;
        let mut add = |x: u32, y: u32| {
            let p = image.get_pixel(x, y);
            sum[0] += p[0] as f64;
            sum[1] += p[1] as f64;
            sum[2] += p[2] as f64;
            count += 1.0;
        };
        for x in 0..w {
            add(x, 0);
            if h > 1 {
                add(x, h - 1);
            }
        }
        for y in 1..h.saturating_sub(1) {
            add(0, y);
            if w > 1 {
                add(w - 1, y);
            }
        }
        [
            (sum[0] / count) as f32,
            (sum[1] / count) as f32,
            (sum[2] / count) as f32,
        ]
    }

    fn distance_sq(pixel: &image::Rgba<u8>, reference: &[f32; 3]) -> f32 {
        let dr = pixel[0] as f32 - reference[0];
        let dg = pixel[1] as f32 - reference[1];
        let db = pixel[2] as f32 - reference[2];
        dr * dr + dg * dg + db * db
    }
}

impl Segmenter for BorderFloodSegmenter {
    fn name(&self) -> &'static str {
        "border flood fill"
    }

    fn segment(&self, image: &RgbaImage) -> Result<GrayImage, SegmentationError> {
        let (w, h) = (image.width(), image.height());
        if w == 0 || h == 0 {
            return Err(SegmentationError::EmptyImage);
        }

        let reference = Self::border_color(image);
        let tol_sq = self.tolerance * self.tolerance;

        let mut background = vec![false; (w * h) as usize];
        let mut queue: VecDeque<(u32, u32)> = VecDeque::with_capacity(1024);

        // Seed from every border pixel that matches the reference color.
        let seed = |x: u32, y: u32, background: &mut Vec<bool>, queue: &mut VecDeque<(u32, u32)>| {
            let idx = (y * w + x) as usize;
            if !background[idx] && Self::distance_sq(image.get_pixel(x, y), &reference) <= tol_sq {
                background[idx] = true;
                queue.push_back((x, y));
            }
        };
        for x in 0..w {
            seed(x, 0, &mut background, &mut queue);
            seed(x, h - 1, &mut background, &mut queue);
        }
        for y in 0..h {
            seed(0, y, &mut background, &mut queue);
            seed(w - 1, y, &mut background, &mut queue);
        }

        while let Some((px, py)) = queue.pop_front() {
            let neighbors = [
                (px.wrapping_sub(1), py),
                (px + 1, py),
                (px, py.wrapping_sub(1)),
                (px, py + 1),
            ];
            for (nx, ny) in neighbors {
                if nx >= w || ny >= h {
                    continue;
                }
                let idx = (ny * w + nx) as usize;
                if background[idx] {
                    continue;
                }
                if Self::distance_sq(image.get_pixel(nx, ny), &reference) <= tol_sq {
                    background[idx] = true;
                    queue.push_back((nx, ny));
                }
            }
        }

        let removed = background.iter().filter(|&&b| b).count();
        log::debug!(
            "segmented {}x{} image: {} background pixels (tolerance {})",
            w,
            h,
            removed,
            self.tolerance
        );

        let mut mask = GrayImage::from_pixel(w, h, FOREGROUND);
        for (idx, is_bg) in background.iter().enumerate() {
            if *is_bg {
                let x = (idx as u32) % w;
                let y = (idx as u32) / w;
                mask.put_pixel(x, y, BACKGROUND);
            }
        }
        Ok(mask)
    }
}
