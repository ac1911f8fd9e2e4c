use image::RgbaImage;

use super::CLEARED;

/// Erase a freehand stroke segment between two successive pointer positions.
///
/// Disks of diameter `width` are stamped along the segment so the result reads
/// as one continuous transparent line. Pixels inside the stroke are hard-set to
/// [`CLEARED`], not blended.
pub fn erase_segment(image: &mut RgbaImage, from: (f32, f32), to: (f32, f32), width: u32) {
    let radius = (width.max(1) as f32) / 2.0;
    let radius_sq = radius * radius;
    let (w, h) = (image.width(), image.height());

    let (x0, y0) = from;
    let (x1, y1) = to;
    let dx = x1 - x0;
    let dy = y1 - y0;
    let dist = (dx * dx + dy * dy).sqrt();
    // Step small enough that consecutive stamps overlap.
    let steps = (dist / (radius * 0.4).max(1.0)).ceil() as usize;

    for s in 0..=steps {
        let t = if steps == 0 { 0.0 } else { s as f32 / steps as f32 };
        let cx = x0 + dx * t;
        let cy = y0 + dy * t;

        let min_x = (cx - radius).max(0.0) as u32;
        let max_x = ((cx + radius).ceil() as u32).min(w);
        let min_y = (cy - radius).max(0.0) as u32;
        let max_y = ((cy + radius).ceil() as u32).min(h);

        for py in min_y..max_y {
            let dy_sq = (py as f32 - cy) * (py as f32 - cy);
            for px in min_x..max_x {
                let dx_px = px as f32 - cx;
                if dx_px * dx_px + dy_sq <= radius_sq {
                    image.put_pixel(px, py, CLEARED);
                }
            }
        }
    }
}
