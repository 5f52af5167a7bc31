//! Per-session configuration.

use crate::constants::{DEFAULT_DENSITY, DRAG_PREVIEW_HALF_DP, DRAG_PREVIEW_SIZE_DP};

/// Display parameters for one canvas session.
///
/// The density converts the shared density-independent constants into
/// pixels. Store and renderer both derive their geometry from the same
/// config instance, so drop placement always matches the floating preview.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasConfig {
    /// Pixels per density-independent unit.
    pub density: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
        }
    }
}

impl CanvasConfig {
    pub fn new(density: f32) -> Self {
        Self { density }
    }

    /// Finger-to-corner offset of the drag preview, in pixels. Subtracted
    /// from the drop point so the committed image lands centered under the
    /// finger rather than under its top-left corner.
    pub fn drag_preview_half_px(&self) -> f32 {
        DRAG_PREVIEW_HALF_DP * self.density
    }

    /// Rendered size of the floating drag preview, in pixels.
    pub fn drag_preview_size_px(&self) -> f32 {
        DRAG_PREVIEW_SIZE_DP * self.density
    }
}
