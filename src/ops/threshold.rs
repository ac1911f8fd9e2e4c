use image::{Rgba, RgbaImage};

use super::CLEARED;

/// Clear every pixel whose R, G and B channels are all strictly greater than
/// the reference color's. Alpha is not compared. Returns how many pixels were
/// cleared, for the status line.
///
/// A reference channel of 255 can never be exceeded, so such a pick removes
/// nothing.
pub fn remove_lighter(image: &mut RgbaImage, reference: Rgba<u8>) -> usize {
    clear_matching(image, |p| {
        p[0] > reference[0] && p[1] > reference[1] && p[2] > reference[2]
    })
}

/// Clear every pixel whose R, G and B channels are all strictly less than the
/// reference color's. Counterpart of [`remove_lighter`].
pub fn remove_darker(image: &mut RgbaImage, reference: Rgba<u8>) -> usize {
    clear_matching(image, |p| {
        p[0] < reference[0] && p[1] < reference[1] && p[2] < reference[2]
    })
}

fn clear_matching(image: &mut RgbaImage, matches: impl Fn(&Rgba<u8>) -> bool) -> usize {
    let mut cleared = 0;
    for pixel in image.pixels_mut() {
        if matches(pixel) {
            *pixel = CLEARED;
            cleared += 1;
        }
    }
    cleared
}
