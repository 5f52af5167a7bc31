//! Long-press drag from the carousel.
//!
//! One tracker per carousel entry. The platform reports pointer positions
//! local to the entry; the tracker converts them to global coordinates via
//! the entry's recorded origin and forwards drag intents to the store.
//!
//! The release callback carries no position, so the tracker remembers the
//! last move and reports that as the drop point. That memory is owned by
//! the tracker instance, never by module-level state.

use tracing::trace;

use crate::input::coords;
use crate::input::state::DragPhase;
use crate::intent::{CanvasIntent, IntentSink};
use crate::types::{ImageRef, Point};

/// Per-entry drag gesture tracker for the carousel.
#[derive(Clone, Debug)]
pub struct CarouselDragTracker {
    image: ImageRef,
    /// Global position of the entry's top-left, updated on every layout
    /// pass. Pointer positions arrive relative to this.
    origin: Point,
    phase: DragPhase,
}

impl CarouselDragTracker {
    pub fn new(image: ImageRef) -> Self {
        Self {
            image,
            origin: Point::default(),
            phase: DragPhase::default(),
        }
    }

    /// Record the entry's global origin after a layout pass.
    pub fn positioned(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// The image this tracker belongs to.
    pub fn image(&self) -> ImageRef {
        self.image
    }

    /// Current phase, for render-side queries (e.g. dimming the source
    /// entry while it is being dragged).
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Long-press recognized at an entry-local position.
    pub fn drag_started(&mut self, sink: &impl IntentSink, local: Point) {
        let global = coords::local_to_global(local, self.origin);
        trace!(image = self.image.res_id(), x = global.x, y = global.y, "drag start");
        self.phase.begin(self.image, global);
        sink.dispatch(CanvasIntent::StartDrag {
            image: self.image,
            global,
        });
    }

    /// Pointer moved while dragging, at an entry-local position.
    pub fn drag_moved(&mut self, sink: &impl IntentSink, local: Point) {
        let global = coords::local_to_global(local, self.origin);
        self.phase.moved(global);
        sink.dispatch(CanvasIntent::UpdateDrag {
            x: global.x,
            y: global.y,
        });
    }

    /// Pointer released. Reports the last known position as the drop point;
    /// `canvas_origin` is the canvas top-left in global coordinates.
    pub fn drag_ended(&mut self, sink: &impl IntentSink, canvas_origin: Point) {
        if let Some(last) = self.phase.finish() {
            trace!(x = last.x, y = last.y, "drag end");
            sink.dispatch(CanvasIntent::EndDrag {
                drop_x: last.x,
                drop_y: last.y,
                canvas_origin,
            });
        }
    }

    /// Gesture interrupted by the platform.
    pub fn drag_cancelled(&mut self, sink: &impl IntentSink) {
        if self.phase.finish().is_some() {
            trace!("drag cancelled");
            sink.dispatch(CanvasIntent::CancelDrag);
        }
    }
}
