//! Pan/pinch/rotate gestures on a placed image.
//!
//! The platform reports transform gestures as incremental callbacks: a pan
//! delta, a zoom factor, a rotation delta. The tracker folds those into the
//! image's absolute scale and rotation locally (for smooth rendering
//! between store round-trips) and emits `UpdateTransform` intents carrying
//! pan deltas plus the new absolute values.

use crate::constants::{MAX_SCALE, MIN_SCALE};
use crate::intent::{CanvasIntent, IntentSink};
use crate::types::{CanvasImage, ImageId, Point};

/// Transform gesture tracker for one placed image.
#[derive(Clone, Debug)]
pub struct TransformTracker {
    id: ImageId,
    scale: f32,
    rotation: f32,
}

impl TransformTracker {
    /// Seed a tracker from the image's current transform.
    pub fn new(image: &CanvasImage) -> Self {
        Self {
            id: image.id.clone(),
            scale: image.scale,
            rotation: image.rotation,
        }
    }

    /// Local view of the scale, for rendering before the next snapshot.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Local view of the rotation, for rendering before the next snapshot.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// One transform-gesture callback: pan delta in pixels, multiplicative
    /// zoom factor, additive rotation delta in degrees.
    pub fn gesture(&mut self, sink: &impl IntentSink, pan: Point, zoom: f32, rotation_delta: f32) {
        self.scale = (self.scale * zoom).clamp(MIN_SCALE, MAX_SCALE);
        self.rotation += rotation_delta;
        sink.dispatch(CanvasIntent::UpdateTransform {
            id: self.id.clone(),
            dx: pan.x,
            dy: pan.y,
            new_scale: Some(self.scale),
            new_rotation: Some(self.rotation),
        });
    }

    /// Re-seed from a published snapshot, if the store changed the image
    /// underneath us.
    pub fn sync(&mut self, image: &CanvasImage) {
        debug_assert_eq!(self.id, image.id);
        self.scale = image.scale;
        self.rotation = image.rotation;
    }
}
