//! Canvas view state and its reducers.
//!
//! [`CanvasViewState`] is the aggregate root: everything a renderer needs to
//! draw the screen. The store owns the single mutable instance; everyone
//! else sees published immutable snapshots.
//!
//! The reducer methods here are pure state transitions - no channels, no
//! threads, no I/O - which is what makes the drag/drop and transform
//! contracts directly unit-testable.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{MAX_SCALE, MIN_SCALE};
use crate::input::coords;
use crate::types::{CanvasImage, ImageId, ImageRef, Point, TempDrag};

/// Everything the canvas screen shows, as one immutable-snapshot value.
///
/// Insertion order of `canvas_images` is z-order; later entries draw on top.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasViewState {
    /// True while the catalog fetch is in flight.
    pub is_loading: bool,
    /// Catalog failure message, if the load failed.
    pub error: Option<String>,
    /// Images available in the carousel, in catalog order.
    pub images: Vec<ImageRef>,
    /// Images placed on the canvas, in placement order.
    pub canvas_images: Vec<CanvasImage>,
    /// The in-flight drag from the carousel, if any.
    pub temp_drag: Option<TempDrag>,
}

impl CanvasViewState {
    /// Look up a placed image by id.
    pub fn get_image(&self, id: &ImageId) -> Option<&CanvasImage> {
        self.canvas_images.iter().find(|img| &img.id == id)
    }

    // ------------------------------------------------------------------
    // Catalog loading
    // ------------------------------------------------------------------

    /// The catalog fetch started.
    pub fn load_started(&mut self) {
        self.is_loading = true;
    }

    /// The catalog fetch succeeded.
    pub fn images_loaded(&mut self, images: Vec<ImageRef>) {
        self.is_loading = false;
        self.images = images;
    }

    /// The catalog fetch failed. Placed images are left as they were.
    pub fn load_failed(&mut self, message: String) {
        self.is_loading = false;
        self.error = Some(message);
    }

    // ------------------------------------------------------------------
    // Temporary drag lifecycle
    // ------------------------------------------------------------------

    /// Begin a drag from the carousel. No-op while another drag is active;
    /// the drag machine is single-entry.
    pub fn start_drag(&mut self, image: ImageRef, global: Point) -> bool {
        if self.temp_drag.is_some() {
            debug!("start_drag ignored: drag already active");
            return false;
        }
        self.temp_drag = Some(TempDrag::new(image, global));
        true
    }

    /// Move the in-flight drag. No-op when no drag is active.
    pub fn update_drag(&mut self, x: f32, y: f32) -> bool {
        match self.temp_drag {
            Some(ref mut drag) => {
                drag.x = x;
                drag.y = y;
                true
            }
            None => false,
        }
    }

    /// Release the drag. Commits a new [`CanvasImage`] when the adjusted
    /// drop point has both coordinates non-negative; always clears the
    /// temporary drag.
    ///
    /// The bounds check is lower-bound-only: drops near the right/bottom
    /// edges can land an image partly outside the visible canvas.
    pub fn end_drag(
        &mut self,
        drop: Point,
        canvas_origin: Point,
        half_preview_px: f32,
    ) -> Option<ImageId> {
        self.temp_drag.take().and_then(|drag| {
            let local = coords::global_to_canvas(drop, canvas_origin);
            let adjusted = coords::center_under_finger(local, half_preview_px);

            if adjusted.x >= 0.0 && adjusted.y >= 0.0 {
                let img = CanvasImage::new(drag.image, adjusted);
                let id = img.id.clone();
                debug!(%id, x = adjusted.x, y = adjusted.y, "drop committed");
                self.canvas_images.push(img);
                Some(id)
            } else {
                debug!(x = adjusted.x, y = adjusted.y, "drop outside canvas, discarded");
                None
            }
        })
    }

    /// Discard the drag without committing.
    pub fn cancel_drag(&mut self) {
        self.temp_drag = None;
    }

    // ------------------------------------------------------------------
    // Placed-image transforms
    // ------------------------------------------------------------------

    /// Apply a pan/pinch/rotate update to one placed image.
    ///
    /// `dx`/`dy` accumulate onto the current offset; scale and rotation are
    /// absolute when provided. Scale is clamped to `[MIN_SCALE, MAX_SCALE]`
    /// whatever the caller sends. Unknown ids are a no-op.
    pub fn update_transform(
        &mut self,
        id: &ImageId,
        dx: f32,
        dy: f32,
        new_scale: Option<f32>,
        new_rotation: Option<f32>,
    ) -> bool {
        let Some(img) = self.canvas_images.iter_mut().find(|img| &img.id == id) else {
            debug!(%id, "update_transform ignored: unknown image");
            return false;
        };
        img.offset_x += dx;
        img.offset_y += dy;
        if let Some(scale) = new_scale {
            img.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        }
        if let Some(rotation) = new_rotation {
            img.rotation = rotation;
        }
        true
    }
}
