//! Input routing module
//!
//! Provides the single, board-wide gesture state for drag/resize operations
//! and the clamping math applied on every pointer move.

mod router;
mod drag;
mod result;

pub use router::InputRouter;
pub use drag::DragState;
pub use result::InputResult;

use crate::math::{Size, Vec2};

/// Clamp a dragged widget's top-left corner so `min_visible` pixels of it
/// stay inside the viewport. Each axis is clamped independently.
pub fn clamp_drag_position(candidate: Vec2, viewport: Size, min_visible: f32) -> Vec2 {
    let max = Vec2::new(
        (viewport.width - min_visible).max(0.0),
        (viewport.height - min_visible).max(0.0),
    );
    candidate.clamp(Vec2::ZERO, max)
}

/// Size implied by dragging the bottom-right corner to `pointer` while the
/// top-left corner stays at `position`, raised to `min_size`.
pub fn calculate_resize(position: Vec2, pointer: Vec2, min_size: Size) -> Size {
    let extent = pointer - position;
    Size::new(extent.x, extent.y).at_least(min_size)
}
