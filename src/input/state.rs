//! Drag-phase state machine for the carousel trackers.
//!
//! An explicit enum instead of scattered flags, so a tracker cannot be
//! half-dragging.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging        (long-press picks up a carousel image)
//! Dragging -> Dragging    (pointer moves)
//! Dragging -> Idle        (release or cancel)
//! ```

use crate::types::{ImageRef, Point};

/// Where a carousel drag tracker is in its gesture lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragPhase {
    /// No active drag.
    #[default]
    Idle,

    /// A drag is in flight.
    Dragging {
        /// The image being dragged.
        image: ImageRef,
        /// Last reported pointer position, in global coordinates. The end
        /// event carries no position of its own, so this is what gets
        /// reported as the drop point.
        last: Point,
    },
}

impl DragPhase {
    /// Returns true if no drag is active.
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a drag is in flight.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// The image being dragged, if any.
    pub fn image(&self) -> Option<ImageRef> {
        match self {
            Self::Dragging { image, .. } => Some(*image),
            Self::Idle => None,
        }
    }

    /// Last pointer position of the in-flight drag, if any.
    pub fn last_position(&self) -> Option<Point> {
        match self {
            Self::Dragging { last, .. } => Some(*last),
            Self::Idle => None,
        }
    }

    /// Enter the dragging phase.
    pub fn begin(&mut self, image: ImageRef, at: Point) {
        *self = Self::Dragging { image, last: at };
    }

    /// Record pointer movement. No-op when idle.
    pub fn moved(&mut self, to: Point) {
        if let Self::Dragging { last, .. } = self {
            *last = to;
        }
    }

    /// Leave the dragging phase, returning the final pointer position.
    pub fn finish(&mut self) -> Option<Point> {
        let last = self.last_position();
        *self = Self::Idle;
        last
    }
}
