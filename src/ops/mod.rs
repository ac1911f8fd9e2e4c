//! Stateless single-pass pixel transforms over the current bitmap.

pub mod erase;
pub mod magnifier;
pub mod threshold;

use image::Rgba;

/// The value erased pixels are set to: white with zero alpha.
pub const CLEARED: Rgba<u8> = Rgba([255, 255, 255, 0]);
