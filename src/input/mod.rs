//! Gesture-to-intent translation for the canvas.
//!
//! This module turns raw touch callbacks into [`CanvasIntent`]s:
//!
//! - `coords` - coordinate conversion between global and canvas-local space
//! - `state` - explicit drag-phase state machine
//! - `drag` - long-press drag from the carousel (start/move/end/cancel)
//! - `transform` - pan/pinch/rotate on a placed image
//!
//! Trackers own their own per-instance state; nothing here is process-wide.
//!
//! [`CanvasIntent`]: crate::intent::CanvasIntent

pub mod coords;
mod drag;
mod state;
mod transform;

pub use drag::CarouselDragTracker;
pub use state::DragPhase;
pub use transform::TransformTracker;
