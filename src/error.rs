use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced to the user as a blocking dialog. None of these are fatal;
/// the editor state is left untouched and the user retries.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The picked file does not carry a supported raster extension.
    #[error("unsupported image file: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// An operation that needs a loaded image was invoked on an empty editor.
    #[error("please import an input image first")]
    NoImage,

    /// Decoding or encoding failed inside the image crate.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// The background segmentation backend reported a failure.
    #[error("background removal failed: {0}")]
    Segmentation(String),
}
