//! Canvas intents - the messages that mutate canvas state.
//!
//! Every mutation of [`CanvasViewState`](crate::state::CanvasViewState)
//! enters through one of these variants. The gesture trackers in `input`
//! produce them; the store consumes them strictly in arrival order.

use crate::types::{ImageId, ImageRef, Point};

/// One intent against the canvas state store.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasIntent {
    /// Fetch the image catalog and populate the carousel. Issued once at
    /// session startup.
    LoadImages,

    /// A long-press drag lifted an image out of the carousel.
    StartDrag {
        image: ImageRef,
        /// Pointer position in global (screen) coordinates.
        global: Point,
    },

    /// The in-flight drag moved.
    UpdateDrag { x: f32, y: f32 },

    /// The drag was released. The store decides whether the drop commits.
    EndDrag {
        /// Release position in global coordinates.
        drop_x: f32,
        drop_y: f32,
        /// Canvas top-left in the same global coordinate space.
        canvas_origin: Point,
    },

    /// The drag was interrupted without a release position.
    CancelDrag,

    /// Pan/pinch/rotate update for one placed image. `dx`/`dy` are deltas;
    /// `new_scale`/`new_rotation` are absolute values when present.
    UpdateTransform {
        id: ImageId,
        dx: f32,
        dy: f32,
        new_scale: Option<f32>,
        new_rotation: Option<f32>,
    },
}

/// Anything that accepts intents.
///
/// The store handle is the production sink; tests collect intents directly.
pub trait IntentSink {
    fn dispatch(&self, intent: CanvasIntent);
}
