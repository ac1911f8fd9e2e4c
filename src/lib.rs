#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod document;
pub mod error;
pub mod history;
pub mod ops;
pub mod panels;
pub mod segmentation;
pub mod tool;

pub use app::TransparenterApp;
pub use document::Document;
pub use error::EditorError;
pub use history::SnapshotHistory;
pub use segmentation::{BorderFloodSegmenter, Segmenter};
pub use tool::{RemovalMode, ToolState};
