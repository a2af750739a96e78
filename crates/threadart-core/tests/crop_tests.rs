// Host-side tests for the crop/pan/zoom transform.

use glam::DVec2;
use threadart_core::constants::{CROP_MIN_SCALE, OUTPUT_SIZE, WHEEL_ZOOM_PER_UNIT};
use threadart_core::*;

fn close(a: DVec2, b: DVec2) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn preview_size_follows_viewport() {
    assert_eq!(preview_size_for_viewport(1920.0), 400.0);
    assert_eq!(preview_size_for_viewport(360.0), 320.0);
    assert_eq!(preview_size_for_viewport(10.0), 1.0);
}

#[test]
fn initial_transform_covers_and_centers() {
    // Landscape: height is the limiting axis.
    let c = Cropper::new(1600.0, 800.0, 400.0).unwrap();
    let s = c.state();
    assert_eq!(s.scale, 0.5);
    assert_eq!(s.x, -200.0);
    assert_eq!(s.y, 0.0);
    assert_eq!(s.min_scale, CROP_MIN_SCALE);

    // Portrait: width is the limiting axis.
    let c = Cropper::new(200.0, 400.0, 400.0).unwrap();
    let s = c.state();
    assert_eq!(s.scale, 2.0);
    assert_eq!(s.x, 0.0);
    assert_eq!(s.y, -200.0);

    // The image covers every preview corner.
    let t = c.preview_transform();
    let tl = t.transform_point2(DVec2::ZERO);
    let br = t.transform_point2(DVec2::new(200.0, 400.0));
    assert!(tl.x <= 0.0 && tl.y <= 0.0);
    assert!(br.x >= 400.0 && br.y >= 400.0);
}

#[test]
fn rejects_empty_images() {
    assert!(Cropper::new(0.0, 100.0, 400.0).is_none());
    assert!(Cropper::new(100.0, 100.0, 0.0).is_none());
}

#[test]
fn drag_pans_by_pointer_travel() {
    let mut c = Cropper::new(400.0, 400.0, 400.0).unwrap();
    assert!(!c.drag_to(50.0, 50.0));
    c.begin_drag(100.0, 100.0);
    assert!(c.drag_to(130.0, 80.0));
    assert!(c.drag_to(150.0, 90.0));
    assert_eq!((c.state().x, c.state().y), (50.0, -10.0));
    c.end_drag();
    assert!(!c.is_dragging());
    assert!(!c.drag_to(0.0, 0.0));
    assert_eq!((c.state().x, c.state().y), (50.0, -10.0));
}

#[test]
fn wheel_zoom_is_floored_but_unbounded_above() {
    let mut c = Cropper::new(400.0, 400.0, 400.0).unwrap();
    c.zoom(100.0);
    assert!((c.state().scale - (1.0 - 100.0 * WHEEL_ZOOM_PER_UNIT)).abs() < 1e-12);
    c.zoom(1_000_000.0);
    assert_eq!(c.state().scale, CROP_MIN_SCALE);
    c.zoom(-50_000.0);
    assert!(c.state().scale > 50.0);
}

#[test]
fn identity_pan_maps_top_left_to_top_left() {
    let (image_w, image_h) = (1000.0, 1000.0);
    let preview = 400.0;
    // A square image cover-fits the square preview exactly, with no pan.
    let c = Cropper::new(image_w, image_h, preview).unwrap();
    assert_eq!((c.state().x, c.state().y), (0.0, 0.0));
    assert_eq!(c.state().scale, preview / image_w);
    let t = c.output_transform(OUTPUT_SIZE);
    assert!(close(t.transform_point2(DVec2::ZERO), DVec2::ZERO));
    let per_pixel = OUTPUT_SIZE / image_w;
    assert!(close(
        t.transform_point2(DVec2::new(1.0, 1.0)),
        DVec2::splat(per_pixel)
    ));
    assert!(close(
        t.transform_point2(DVec2::new(image_w, image_h)),
        DVec2::splat(OUTPUT_SIZE)
    ));
}

#[test]
fn output_transform_rescales_pan() {
    let mut c = Cropper::new(800.0, 800.0, 400.0).unwrap();
    c.begin_drag(0.0, 0.0);
    c.drag_to(40.0, -20.0);
    let t = c.output_transform(500.0);
    assert!(close(t.transform_point2(DVec2::ZERO), DVec2::new(50.0, -25.0)));
}
