//! Core types for the image canvas system.
//!
//! This module defines the value types the rest of the crate moves around:
//! screen points, catalog image references, placed canvas images, and the
//! in-flight temporary drag.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{DEFAULT_ROTATION, DEFAULT_SCALE};

// ============================================================================
// Geometry
// ============================================================================

/// A 2D position in pixels. Whether it is global (screen) or canvas-local
/// depends on context; conversions live in `input::coords`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Shorthand constructor for [`Point`].
#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point { x, y }
}

// ============================================================================
// Image References
// ============================================================================

/// Opaque reference to a bundled image resource.
///
/// The store only ever compares these for identity; what they resolve to on
/// screen is the renderer's business.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef(u32);

/// The bundled image resources, in catalog order.
pub const BUNDLED_IMAGES: [(&str, ImageRef); 5] = [
    ("image1", ImageRef(1)),
    ("image2", ImageRef(2)),
    ("image3", ImageRef(3)),
    ("image4", ImageRef(4)),
    ("image5", ImageRef(5)),
];

impl ImageRef {
    /// Resolve a catalog entry name to a resource reference.
    ///
    /// Unknown names fall back to the first bundled image rather than
    /// failing the whole load.
    pub fn resolve(name: &str) -> ImageRef {
        BUNDLED_IMAGES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, r)| *r)
            .unwrap_or(BUNDLED_IMAGES[0].1)
    }

    /// Raw resource id, for renderers that key their asset table by number.
    pub fn res_id(self) -> u32 {
        self.0
    }
}

// ============================================================================
// Placed Images
// ============================================================================

/// Unique identity of a placed canvas image.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageId(String);

impl ImageId {
    /// Generate a fresh unique id.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An image placed on the canvas.
///
/// Position is relative to the canvas top-left, in pixels. Scale is clamped
/// to `[MIN_SCALE, MAX_SCALE]` by the store; rotation is unbounded degrees
/// and accumulates across gestures.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasImage {
    /// Unique identifier, generated at commit time.
    pub id: ImageId,
    /// Which catalog image this is an instance of.
    pub image: ImageRef,
    /// X offset from the canvas top-left, in pixels.
    pub offset_x: f32,
    /// Y offset from the canvas top-left, in pixels.
    pub offset_y: f32,
    /// Scale multiplier.
    pub scale: f32,
    /// Rotation in degrees.
    pub rotation: f32,
}

impl CanvasImage {
    /// Create a freshly committed image at the given canvas-local position.
    pub fn new(image: ImageRef, offset: Point) -> Self {
        Self {
            id: ImageId::new(),
            image,
            offset_x: offset.x,
            offset_y: offset.y,
            scale: DEFAULT_SCALE,
            rotation: DEFAULT_ROTATION,
        }
    }
}

// ============================================================================
// Temporary Drag
// ============================================================================

/// The floating preview state between a long-press drag start and its
/// release. Not yet part of the canvas; at most one exists at a time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TempDrag {
    /// Which catalog image is being dragged.
    pub image: ImageRef,
    /// Current pointer x in global (screen) coordinates.
    pub x: f32,
    /// Current pointer y in global (screen) coordinates.
    pub y: f32,
}

impl TempDrag {
    pub fn new(image: ImageRef, position: Point) -> Self {
        Self {
            image,
            x: position.x,
            y: position.y,
        }
    }

    /// Pointer position as a [`Point`].
    pub fn position(&self) -> Point {
        point(self.x, self.y)
    }
}
