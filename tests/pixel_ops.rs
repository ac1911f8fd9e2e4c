use image::{Rgba, RgbaImage};
use transparenter::ops::erase::erase_segment;
use transparenter::ops::magnifier::magnified_view;
use transparenter::ops::threshold::{remove_darker, remove_lighter};

fn solid(width: u32, height: u32, color: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(color))
}

#[test]
fn erase_clears_alpha_along_the_drag_path() {
    let mut img = solid(50, 50, [10, 20, 30, 255]);
    erase_segment(&mut img, (10.0, 25.0), (40.0, 25.0), 5);

    // Endpoints and midpoint of the stroke are fully transparent white.
    for x in [10u32, 25, 40] {
        assert_eq!(img.get_pixel(x, 25).0, [255, 255, 255, 0], "at x={x}");
    }
    // Far away from the stroke nothing changed.
    assert_eq!(img.get_pixel(25, 10).0, [10, 20, 30, 255]);
}

#[test]
fn erase_is_confined_to_the_stroke_radius() {
    let mut img = solid(50, 50, [10, 20, 30, 255]);
    // Width 5 -> radius 2.5 around the y=25 line.
    erase_segment(&mut img, (10.0, 25.0), (40.0, 25.0), 5);

    assert_eq!(img.get_pixel(25, 27).0[3], 0); // 2 px off-axis, inside
    assert_eq!(img.get_pixel(25, 28).0[3], 255); // 3 px off-axis, outside
}

#[test]
fn erase_tolerates_positions_outside_the_bitmap() {
    let mut img = solid(50, 50, [10, 20, 30, 255]);
    erase_segment(&mut img, (-10.0, 25.0), (60.0, 25.0), 5);

    assert_eq!(img.get_pixel(0, 25).0[3], 0);
    assert_eq!(img.get_pixel(49, 25).0[3], 0);
}

#[test]
fn lighter_threshold_at_full_white_removes_nothing() {
    let mut img = solid(8, 8, [200, 220, 240, 255]);
    let before = img.clone();

    let cleared = remove_lighter(&mut img, Rgba([255, 255, 255, 255]));

    assert_eq!(cleared, 0);
    assert_eq!(img, before);
}

#[test]
fn darker_threshold_at_full_black_removes_nothing() {
    let mut img = solid(8, 8, [5, 10, 15, 255]);
    let before = img.clone();

    let cleared = remove_darker(&mut img, Rgba([0, 0, 0, 255]));

    assert_eq!(cleared, 0);
    assert_eq!(img, before);
}

#[test]
fn lighter_removal_requires_all_channels_strictly_above() {
    let mut img = RgbaImage::new(3, 1);
    img.put_pixel(0, 0, Rgba([101, 101, 101, 255])); // all above
    img.put_pixel(1, 0, Rgba([101, 100, 101, 255])); // green only equal
    img.put_pixel(2, 0, Rgba([100, 100, 100, 255])); // equal everywhere

    let cleared = remove_lighter(&mut img, Rgba([100, 100, 100, 255]));

    assert_eq!(cleared, 1);
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 0]);
    assert_eq!(img.get_pixel(1, 0).0, [101, 100, 101, 255]);
    assert_eq!(img.get_pixel(2, 0).0, [100, 100, 100, 255]);
}

#[test]
fn darker_removal_requires_all_channels_strictly_below() {
    let mut img = RgbaImage::new(3, 1);
    img.put_pixel(0, 0, Rgba([99, 99, 99, 255]));
    img.put_pixel(1, 0, Rgba([99, 100, 99, 255]));
    img.put_pixel(2, 0, Rgba([100, 100, 100, 255]));

    let cleared = remove_darker(&mut img, Rgba([100, 100, 100, 255]));

    assert_eq!(cleared, 1);
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255, 0]);
    assert_eq!(img.get_pixel(1, 0).0, [99, 100, 99, 255]);
}

#[test]
fn magnifier_view_has_the_expected_size() {
    let img = solid(200, 200, [50, 50, 50, 255]);

    let view = magnified_view(&img, 100, 100, 50).expect("pointer is inside the image");

    assert_eq!(view.dimensions(), (150, 150));
}

#[test]
fn magnifier_clamps_at_the_bitmap_border() {
    let img = solid(200, 200, [50, 50, 50, 255]);

    // The sampled square is cut off at the corner, the output size is not.
    let view = magnified_view(&img, 0, 0, 50).expect("corner is inside the image");
    assert_eq!(view.dimensions(), (150, 150));
}

#[test]
fn magnifier_rejects_pointers_outside_the_bitmap() {
    let img = solid(200, 100, [50, 50, 50, 255]);

    assert!(magnified_view(&img, 200, 50, 50).is_none());
    assert!(magnified_view(&img, 50, 100, 50).is_none());
    assert!(magnified_view(&img, 50, 50, 0).is_none());
}

#[test]
fn magnifier_samples_the_region_under_the_pointer() {
    // Left half black, right half white.
    let mut img = RgbaImage::new(100, 100);
    for (x, _, pixel) in img.enumerate_pixels_mut() {
        *pixel = if x < 50 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        };
    }

    let view = magnified_view(&img, 25, 50, 10).expect("pointer is inside the image");

    // The sampled square lies entirely in the black half.
    assert!(view.pixels().all(|p| p.0[0] < 10));
}
