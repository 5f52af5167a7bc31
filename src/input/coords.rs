//! Coordinate conversion utilities for canvas interactions.
//!
//! All drag positions arrive in one shared global (screen) coordinate
//! space; the canvas stores positions relative to its own top-left. The
//! conversions live here so the formulas exist in exactly one place.

use crate::types::{Point, point};

/// Convert a global (screen) position to canvas-local coordinates.
#[inline]
pub fn global_to_canvas(global: Point, canvas_origin: Point) -> Point {
    point(global.x - canvas_origin.x, global.y - canvas_origin.y)
}

/// Convert a canvas-local position back to global coordinates.
#[inline]
pub fn canvas_to_global(local: Point, canvas_origin: Point) -> Point {
    point(local.x + canvas_origin.x, local.y + canvas_origin.y)
}

/// Shift a drop point by the preview's finger-to-corner offset, so the
/// committed image is centered under the finger rather than hanging off
/// its top-left corner.
#[inline]
pub fn center_under_finger(local: Point, half_preview_px: f32) -> Point {
    point(local.x - half_preview_px, local.y - half_preview_px)
}

/// Convert an element-local pointer position to global coordinates, given
/// the element's recorded global origin.
#[inline]
pub fn local_to_global(local: Point, element_origin: Point) -> Point {
    point(local.x + element_origin.x, local.y + element_origin.y)
}
