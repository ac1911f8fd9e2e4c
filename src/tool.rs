/// Which threshold comparison an armed color removal will run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalMode {
    /// Clear pixels whose channels are all strictly above the picked color.
    Lighter,
    /// Clear pixels whose channels are all strictly below the picked color.
    Darker,
}

impl RemovalMode {
    pub fn label(self) -> &'static str {
        match self {
            RemovalMode::Lighter => "lighter",
            RemovalMode::Darker => "darker",
        }
    }
}

/// Transient UI mode state. Nothing in here survives a restart.
#[derive(Debug, Clone)]
pub struct ToolState {
    /// Manual erase mode: freehand alpha zeroing along the drag path.
    pub eraser_active: bool,
    /// Stroke width in pixels, kept within [`ToolState::ERASER_RANGE`].
    pub eraser_size: u32,
    pub magnifier_active: bool,
    /// Half the side of the square sampled under the cursor.
    pub magnifier_radius: u32,
    /// Armed color-removal mode; the next click on the image picks the
    /// reference color and disarms it.
    pub color_removal: Option<RemovalMode>,
}

impl ToolState {
    pub const ERASER_RANGE: std::ops::RangeInclusive<u32> = 1..=20;

    /// Clamp-assign a new eraser size, rejecting values outside the range.
    pub fn set_eraser_size(&mut self, size: u32) -> bool {
        if Self::ERASER_RANGE.contains(&size) {
            self.eraser_size = size;
            true
        } else {
            false
        }
    }
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            eraser_active: false,
            eraser_size: 5,
            magnifier_active: false,
            magnifier_radius: 50,
            color_removal: None,
        }
    }
}
