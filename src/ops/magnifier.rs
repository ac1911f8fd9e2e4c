use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Build the loupe view for the magnifier: crop the square of half-side
/// `radius` around the pointer, clamped to the bitmap bounds, and upscale it
/// to `3 * radius` square with bicubic filtering.
///
/// Returns `None` when the pointer is outside the bitmap.
pub fn magnified_view(
    image: &RgbaImage,
    pointer_x: u32,
    pointer_y: u32,
    radius: u32,
) -> Option<RgbaImage> {
    let (w, h) = (image.width(), image.height());
    if pointer_x >= w || pointer_y >= h || radius == 0 {
        return None;
    }

    let x0 = pointer_x.saturating_sub(radius);
    let y0 = pointer_y.saturating_sub(radius);
    let x1 = (pointer_x + radius).min(w - 1);
    let y1 = (pointer_y + radius).min(h - 1);
    let crop_w = (x1 - x0).max(1);
    let crop_h = (y1 - y0).max(1);

    let region = imageops::crop_imm(image, x0, y0, crop_w, crop_h).to_image();
    let side = radius * 3;
    Some(imageops::resize(&region, side, side, FilterType::CatmullRom))
}
