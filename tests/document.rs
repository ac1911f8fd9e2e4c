use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use transparenter::{Document, EditorError};

/// Write a PNG to a unique path under the system temp directory.
fn write_temp_png(name: &str, width: u32, height: u32) -> PathBuf {
    let path = std::env::temp_dir().join(format!("transparenter-test-{}-{name}.png", std::process::id()));
    let img = RgbaImage::from_pixel(width, height, Rgba([128, 64, 32, 255]));
    img.save(&path).expect("temp png written");
    path
}

#[test]
fn import_rejects_unsupported_extensions() {
    let mut document = Document::new();

    let result = document.import(Path::new("notes.txt"));

    assert!(matches!(result, Err(EditorError::UnsupportedFormat(_))));
    assert!(!document.is_loaded());
}

#[test]
fn import_keeps_small_images_at_native_size() {
    let path = write_temp_png("small", 300, 200);
    let mut document = Document::new();

    document.import(&path).expect("import succeeds");

    let image = document.image().expect("image is loaded");
    assert_eq!(image.dimensions(), (300, 200));
    let _ = std::fs::remove_file(path);
}

#[test]
fn import_downscales_oversized_images_preserving_aspect() {
    let path = write_temp_png("large", 1440, 720);
    let mut document = Document::new();

    document.import(&path).expect("import succeeds");

    let image = document.image().expect("image is loaded");
    assert_eq!(image.dimensions(), (720, 360));
    let _ = std::fs::remove_file(path);
}

#[test]
fn import_failure_keeps_the_previous_image() {
    let path = write_temp_png("kept", 10, 10);
    let mut document = Document::new();
    document.import(&path).expect("import succeeds");

    let result = document.import(Path::new("missing.png"));

    assert!(result.is_err());
    assert!(document.is_loaded());
    assert_eq!(document.image().unwrap().dimensions(), (10, 10));
    let _ = std::fs::remove_file(path);
}

#[test]
fn save_without_an_image_is_an_error() {
    let document = Document::new();

    let result = document.save_png(Path::new("never-created.png"));

    assert!(matches!(result, Err(EditorError::NoImage)));
}

#[test]
fn save_produces_a_png_round_trip() {
    let source = write_temp_png("roundtrip", 16, 8);
    let target = std::env::temp_dir().join(format!(
        "transparenter-test-{}-roundtrip-out.png",
        std::process::id()
    ));
    let mut document = Document::new();
    document.import(&source).expect("import succeeds");

    document.save_png(&target).expect("save succeeds");

    let reloaded = image::open(&target).expect("saved file decodes").to_rgba8();
    assert_eq!(reloaded.dimensions(), (16, 8));
    let _ = std::fs::remove_file(source);
    let _ = std::fs::remove_file(target);
}
