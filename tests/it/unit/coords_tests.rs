//! Unit tests for coordinate conversion.

use imagecanvas::input::coords;
use imagecanvas::types::point;

#[test]
fn test_global_to_canvas_subtracts_origin() {
    let local = coords::global_to_canvas(point(200.0, 180.0), point(50.0, 40.0));
    assert_eq!(local, point(150.0, 140.0));
}

#[test]
fn test_global_canvas_round_trip() {
    let origin = point(37.0, 91.0);
    let global = point(412.5, 260.25);

    let local = coords::global_to_canvas(global, origin);
    assert_eq!(coords::canvas_to_global(local, origin), global);
}

#[test]
fn test_center_under_finger_shifts_both_axes() {
    let adjusted = coords::center_under_finger(point(150.0, 150.0), 30.0);
    assert_eq!(adjusted, point(120.0, 120.0));
}

#[test]
fn test_center_under_finger_can_go_negative() {
    // Negative adjusted coordinates are how the store detects
    // outside-canvas drops; the converter must not clamp them.
    let adjusted = coords::center_under_finger(point(10.0, 10.0), 30.0);
    assert_eq!(adjusted, point(-20.0, -20.0));
}

#[test]
fn test_local_to_global_adds_element_origin() {
    let global = coords::local_to_global(point(12.0, 8.0), point(100.0, 640.0));
    assert_eq!(global, point(112.0, 648.0));
}
