//! Application-wide constants.
//!
//! Centralizes magic numbers shared between the store and the renderer so
//! the two can never disagree about geometry.

// ============================================================================
// Drag Preview
// ============================================================================

/// Offset from the finger to the drag preview's top-left corner, in
/// density-independent units. The renderer uses it to center the floating
/// preview under the finger; the store uses the same value to compute the
/// commit position on drop. Both MUST read this constant.
pub const DRAG_PREVIEW_HALF_DP: f32 = 60.0;

/// Rendered size of the floating drag preview, in density-independent units.
pub const DRAG_PREVIEW_SIZE_DP: f32 = 80.0;

/// Opacity of the floating drag preview.
pub const DRAG_PREVIEW_ALPHA: f32 = 0.9;

// ============================================================================
// Placed Images
// ============================================================================

/// Minimum scale for a placed image.
pub const MIN_SCALE: f32 = 0.3;

/// Maximum scale for a placed image.
pub const MAX_SCALE: f32 = 4.0;

/// Scale assigned to a freshly committed image.
pub const DEFAULT_SCALE: f32 = 1.0;

/// Rotation (degrees) assigned to a freshly committed image.
pub const DEFAULT_ROTATION: f32 = 0.0;

/// Display size of a placed image at scale 1.0, in density-independent units.
pub const PLACED_IMAGE_SIZE_DP: f32 = 120.0;

// ============================================================================
// Carousel
// ============================================================================

/// Size of one carousel entry, in density-independent units.
pub const CAROUSEL_ITEM_SIZE_DP: f32 = 80.0;

/// Spacing between carousel entries, in density-independent units.
pub const CAROUSEL_SPACING_DP: f32 = 12.0;

// ============================================================================
// Display
// ============================================================================

/// Fallback display density (pixels per density-independent unit) when the
/// platform does not report one.
pub const DEFAULT_DENSITY: f32 = 1.0;
